//! # Poker League
//!
//! Capacity-limited poker tournament registration with per-player
//! statistics, a running rating, and a ranked leaderboard, backed by a
//! single JSON document store.
//!
//! ## Architecture
//!
//! All state lives in one [`store::Document`] persisted as a single
//! JSON file. Every mutating operation is a whole-document
//! load-modify-save cycle, serialized through a single write lock so
//! that capacity and uniqueness checks can never race each other.
//!
//! ## Core Modules
//!
//! - [`store`]: the document store (load, snapshot, serialized mutate)
//! - [`users`]: player profiles with get-or-create semantics
//! - [`tournament`]: tournament records and admin CRUD
//! - [`registrar`]: capacity- and uniqueness-checked registration
//! - [`results`]: ranked result application and rating updates
//! - [`leaderboard`]: capped, rank-annotated rating projection
//! - [`auth`]: the injectable admin allow-list
//!
//! ## Example
//!
//! ```no_run
//! use poker_league::{AdminPolicy, Store};
//! use poker_league::registrar::Registrar;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(Store::open("data.json").await?);
//!     let registrar = Registrar::new(store);
//!     let mine = registrar.registrations_for(42).await;
//!     println!("user 42 has {} registrations", mine.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod leaderboard;
pub mod registrar;
pub mod results;
pub mod store;
pub mod tournament;
pub mod users;

pub use auth::AdminPolicy;
pub use store::{Document, Store, StorageError};
