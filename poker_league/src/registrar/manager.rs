//! Registrar for capacity- and uniqueness-checked registration.

use super::models::Registration;
use crate::store::{StorageError, Store};
use crate::tournament::{RosterEntry, TournamentId};
use crate::users::UserId;
use chrono::Utc;
use log::info;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Registrar errors
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// No tournament with the given id
    #[error("Tournament not found: {0}")]
    NotFound(TournamentId),

    /// The roster is at capacity
    #[error("No seats left")]
    NoSeats,

    /// A registration for this (tournament, user) pair already exists
    #[error("Already registered")]
    AlreadyRegistered,

    /// A required field is missing or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for registrar operations
pub type RegistrarResult<T> = Result<T, RegistrarError>;

/// Fields of a registration request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub tournament_id: TournamentId,
    pub user_id: UserId,
    #[serde(default)]
    pub username: Option<String>,
    pub nickname: String,
    pub phone: String,
}

/// Registrar
#[derive(Clone)]
pub struct Registrar {
    store: Arc<Store>,
}

impl Registrar {
    /// Create a new registrar
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Register a player for a tournament.
    ///
    /// Checks run in a fixed order: tournament exists, seats left, not
    /// already registered. Only after all three pass is the user
    /// profile created or updated, so a rejected registration never
    /// leaves an orphan profile behind.
    pub async fn register(&self, request: RegistrationRequest) -> RegistrarResult<Registration> {
        if request.nickname.trim().is_empty() {
            return Err(RegistrarError::MissingField("nickname"));
        }
        if request.phone.trim().is_empty() {
            return Err(RegistrarError::MissingField("phone"));
        }

        let registration = self
            .store
            .mutate(move |doc| {
                let tournament = doc
                    .tournament(request.tournament_id)
                    .ok_or(RegistrarError::NotFound(request.tournament_id))?;
                if tournament.is_full() {
                    return Err(RegistrarError::NoSeats);
                }
                if doc
                    .registration(request.tournament_id, request.user_id)
                    .is_some()
                {
                    return Err(RegistrarError::AlreadyRegistered);
                }

                let user = doc.get_or_create_user(request.user_id, request.username.as_deref());
                user.nickname = request.nickname.clone();
                user.phone = request.phone.clone();
                let username = user.username.clone();

                let registration = Registration {
                    id: doc.next_id(),
                    tournament_id: request.tournament_id,
                    user_id: request.user_id,
                    username: request.username.unwrap_or(username),
                    nickname: request.nickname.clone(),
                    phone: request.phone.clone(),
                    registered_at: Utc::now(),
                };
                doc.registrations.push(registration.clone());

                // Checked above; the lock guarantees it is still there.
                if let Some(tournament) = doc.tournament_mut(request.tournament_id) {
                    tournament.players.push(RosterEntry {
                        user_id: request.user_id,
                        nickname: request.nickname,
                        phone: request.phone,
                    });
                }
                Ok(registration)
            })
            .await?;

        info!(
            "Registered user {} for tournament {}",
            registration.user_id, registration.tournament_id
        );
        Ok(registration)
    }

    /// Cancel a registration.
    ///
    /// Removes the roster entry and the registration if present.
    /// Cancelling something that does not exist is a successful no-op,
    /// so repeated cancels are safe.
    pub async fn cancel(
        &self,
        tournament_id: TournamentId,
        user_id: UserId,
    ) -> RegistrarResult<()> {
        self.store
            .mutate(move |doc| {
                if let Some(tournament) = doc.tournament_mut(tournament_id) {
                    tournament.players.retain(|p| p.user_id != user_id);
                }
                doc.registrations
                    .retain(|r| !(r.tournament_id == tournament_id && r.user_id == user_id));
                Ok::<_, RegistrarError>(())
            })
            .await?;

        info!("Cancelled registration of user {user_id} for tournament {tournament_id}");
        Ok(())
    }

    /// All registrations belonging to one user.
    pub async fn registrations_for(&self, user_id: UserId) -> Vec<Registration> {
        self.store
            .snapshot()
            .await
            .registrations
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect()
    }
}
