//! Tournament records and admin CRUD.
//!
//! Tournaments are created, updated, and deleted by admin callers;
//! their roster is mutated by the registrar and their results and
//! status by the results processor. Deleting a tournament cascades to
//! every registration referencing it.

pub mod manager;
pub mod models;

pub use manager::{
    NewTournament, TournamentError, TournamentManager, TournamentResult, TournamentUpdate,
};
pub use models::{ResultEntry, RosterEntry, Tournament, TournamentId, TournamentStatus};
