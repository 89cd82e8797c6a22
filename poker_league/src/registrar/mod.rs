//! Tournament registration.
//!
//! The registrar enforces the two invariants that matter here: a
//! roster never exceeds the tournament's capacity, and a user holds at
//! most one registration per tournament. Both checks run inside the
//! store's serialized mutation, so concurrent requests cannot slip
//! past them together.

pub mod manager;
pub mod models;

pub use manager::{Registrar, RegistrarError, RegistrarResult, RegistrationRequest};
pub use models::{Registration, RegistrationId};
