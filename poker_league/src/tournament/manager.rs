//! Tournament manager for admin tournament CRUD.

use super::models::{Tournament, TournamentId, TournamentStatus};
use crate::auth::AdminPolicy;
use crate::store::{StorageError, Store};
use crate::users::UserId;
use log::info;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// No tournament with the given id
    #[error("Tournament not found: {0}")]
    NotFound(TournamentId),

    /// A required field is missing or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Requested capacity is below the current roster size
    #[error("maxPlayers is below the current roster size of {0}")]
    CapacityBelowRoster(usize),

    /// Caller is not on the admin allow-list
    #[error("Admin access required")]
    Forbidden,

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;

/// Parameters for creating a tournament.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTournament {
    pub title: String,
    pub date: String,
    pub buy_in: String,
    pub prize: String,
    pub max_players: usize,
    #[serde(default)]
    pub status: Option<TournamentStatus>,
}

/// Partial tournament update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentUpdate {
    pub title: Option<String>,
    pub date: Option<String>,
    pub buy_in: Option<String>,
    pub prize: Option<String>,
    pub max_players: Option<usize>,
    pub status: Option<TournamentStatus>,
}

/// Tournament manager
#[derive(Clone)]
pub struct TournamentManager {
    store: Arc<Store>,
    policy: AdminPolicy,
}

impl TournamentManager {
    /// Create a new tournament manager
    pub fn new(store: Arc<Store>, policy: AdminPolicy) -> Self {
        Self { store, policy }
    }

    /// List all tournaments from a read snapshot.
    pub async fn list(&self) -> Vec<Tournament> {
        self.store.snapshot().await.tournaments
    }

    /// Get one tournament.
    pub async fn get(&self, id: TournamentId) -> TournamentResult<Tournament> {
        self.store
            .snapshot()
            .await
            .tournament(id)
            .cloned()
            .ok_or(TournamentError::NotFound(id))
    }

    /// Create a new tournament (admin only).
    pub async fn create(
        &self,
        caller: UserId,
        new: NewTournament,
    ) -> TournamentResult<Tournament> {
        if !self.policy.is_admin(caller) {
            return Err(TournamentError::Forbidden);
        }
        validate_new(&new)?;

        let tournament = self
            .store
            .mutate(move |doc| {
                let mut tournament = Tournament::new(
                    doc.next_id(),
                    new.title,
                    new.date,
                    new.buy_in,
                    new.prize,
                    new.max_players,
                );
                if let Some(status) = new.status {
                    tournament.status = status;
                }
                doc.tournaments.push(tournament.clone());
                Ok::<_, TournamentError>(tournament)
            })
            .await?;

        info!("Created tournament {} ({})", tournament.id, tournament.title);
        Ok(tournament)
    }

    /// Apply a partial update to a tournament (admin only).
    ///
    /// `max_players` cannot be lowered below the number of players
    /// already seated; cancel registrations first.
    pub async fn update(
        &self,
        caller: UserId,
        id: TournamentId,
        update: TournamentUpdate,
    ) -> TournamentResult<Tournament> {
        if !self.policy.is_admin(caller) {
            return Err(TournamentError::Forbidden);
        }

        self.store
            .mutate(move |doc| {
                let tournament = doc.tournament_mut(id).ok_or(TournamentError::NotFound(id))?;
                if let Some(title) = update.title {
                    tournament.title = title;
                }
                if let Some(date) = update.date {
                    tournament.date = date;
                }
                if let Some(buy_in) = update.buy_in {
                    tournament.buy_in = buy_in;
                }
                if let Some(prize) = update.prize {
                    tournament.prize = prize;
                }
                if let Some(max_players) = update.max_players {
                    if max_players < tournament.players.len() {
                        return Err(TournamentError::CapacityBelowRoster(
                            tournament.players.len(),
                        ));
                    }
                    tournament.max_players = max_players;
                }
                if let Some(status) = update.status {
                    tournament.status = status;
                }
                Ok(tournament.clone())
            })
            .await
    }

    /// Delete a tournament (admin only).
    ///
    /// Cascades to every registration referencing it; the roster goes
    /// with the tournament record itself.
    pub async fn delete(&self, caller: UserId, id: TournamentId) -> TournamentResult<()> {
        if !self.policy.is_admin(caller) {
            return Err(TournamentError::Forbidden);
        }

        self.store
            .mutate(move |doc| {
                let idx = doc
                    .tournaments
                    .iter()
                    .position(|t| t.id == id)
                    .ok_or(TournamentError::NotFound(id))?;
                doc.tournaments.remove(idx);
                doc.registrations.retain(|r| r.tournament_id != id);
                Ok::<_, TournamentError>(())
            })
            .await?;

        info!("Deleted tournament {id}");
        Ok(())
    }
}

fn validate_new(new: &NewTournament) -> TournamentResult<()> {
    if new.title.trim().is_empty() {
        return Err(TournamentError::MissingField("title"));
    }
    if new.date.trim().is_empty() {
        return Err(TournamentError::MissingField("date"));
    }
    if new.buy_in.trim().is_empty() {
        return Err(TournamentError::MissingField("buyin"));
    }
    if new.prize.trim().is_empty() {
        return Err(TournamentError::MissingField("prize"));
    }
    if new.max_players == 0 {
        return Err(TournamentError::MissingField("maxPlayers"));
    }
    Ok(())
}
