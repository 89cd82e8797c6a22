//! The persisted aggregate.

use crate::registrar::Registration;
use crate::tournament::{Tournament, TournamentId};
use crate::users::{User, UserId};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The whole application state, persisted as one unit.
///
/// Collections keep insertion order; nothing in the system relies on
/// any other ordering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub tournaments: Vec<Tournament>,
    #[serde(default)]
    pub registrations: Vec<Registration>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Document {
    /// Look up a tournament by id.
    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    /// Mutable tournament lookup.
    pub fn tournament_mut(&mut self, id: TournamentId) -> Option<&mut Tournament> {
        self.tournaments.iter_mut().find(|t| t.id == id)
    }

    /// Look up a user by id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Mutable user lookup.
    pub fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    /// Look up a user, creating a fresh profile on first contact.
    ///
    /// Idempotent for existing users: the stored record is returned
    /// unchanged regardless of `username`.
    pub fn get_or_create_user(&mut self, id: UserId, username: Option<&str>) -> &mut User {
        match self.users.iter().position(|u| u.id == id) {
            Some(idx) => &mut self.users[idx],
            None => {
                self.users.push(User::new(id, username));
                let idx = self.users.len() - 1;
                &mut self.users[idx]
            }
        }
    }

    /// The registration binding `user_id` to `tournament_id`, if any.
    ///
    /// At most one such registration exists at any time.
    pub fn registration(&self, tournament_id: TournamentId, user_id: UserId) -> Option<&Registration> {
        self.registrations
            .iter()
            .find(|r| r.tournament_id == tournament_id && r.user_id == user_id)
    }

    /// Next entity id: the current wall-clock milliseconds, bumped past
    /// any id already in use so ids stay unique and sort by creation
    /// time.
    pub fn next_id(&self) -> i64 {
        let max_used = self
            .tournaments
            .iter()
            .map(|t| t.id)
            .chain(self.registrations.iter().map(|r| r.id))
            .max()
            .unwrap_or(0);
        Utc::now().timestamp_millis().max(max_used + 1)
    }
}
