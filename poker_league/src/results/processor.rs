//! Results processor: stats, history, and rating updates.

use crate::auth::AdminPolicy;
use crate::store::{StorageError, Store};
use crate::tournament::{ResultEntry, Tournament, TournamentId, TournamentStatus};
use crate::users::{HistoryEntry, UserId};
use chrono::Utc;
use log::info;
use std::sync::Arc;
use thiserror::Error;

/// Results errors
#[derive(Debug, Error)]
pub enum ResultsError {
    /// No tournament with the given id
    #[error("Tournament not found: {0}")]
    NotFound(TournamentId),

    /// Caller is not on the admin allow-list
    #[error("Admin access required")]
    Forbidden,

    /// Results for this tournament were already recorded
    #[error("Results already recorded")]
    AlreadyFinished,

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for results operations
pub type ProcessorResult<T> = Result<T, ResultsError>;

/// Rating delta for a finishing place.
///
/// Podium finishes gain 50/40/30; everyone else pays 10. The rating
/// has no floor or ceiling.
pub fn rating_delta(place: u32) -> i64 {
    match place {
        1..=3 => 50 - (i64::from(place) - 1) * 10,
        _ => -10,
    }
}

/// Results processor
#[derive(Clone)]
pub struct ResultsProcessor {
    store: Arc<Store>,
    policy: AdminPolicy,
}

impl ResultsProcessor {
    /// Create a new results processor
    pub fn new(store: Arc<Store>, policy: AdminPolicy) -> Self {
        Self { store, policy }
    }

    /// Record a ranked result sheet for a tournament (admin only).
    ///
    /// Sets the tournament's results, marks it finished, and for every
    /// result line whose user exists updates games played, win and
    /// cash counts, profit against the parsed buy-in, the history, and
    /// the rating. Lines naming unknown users are silently skipped.
    ///
    /// A tournament that is already finished rejects the submission,
    /// so a retried request cannot double-count anything. Re-scoring
    /// requires flipping the tournament back to open first.
    pub async fn apply(
        &self,
        caller: UserId,
        tournament_id: TournamentId,
        results: Vec<ResultEntry>,
    ) -> ProcessorResult<Tournament> {
        if !self.policy.is_admin(caller) {
            return Err(ResultsError::Forbidden);
        }

        let tournament = self
            .store
            .mutate(move |doc| {
                let (title, buy_in_amount) = {
                    let tournament = doc
                        .tournament(tournament_id)
                        .ok_or(ResultsError::NotFound(tournament_id))?;
                    if tournament.status == TournamentStatus::Finished {
                        return Err(ResultsError::AlreadyFinished);
                    }
                    (tournament.title.clone(), tournament.buy_in_amount())
                };

                let today = Utc::now().date_naive();
                for entry in &results {
                    let Some(user) = doc.user_mut(entry.user_id) else {
                        continue;
                    };
                    user.stats.total_games += 1;
                    user.history.push(HistoryEntry {
                        tournament_id,
                        tournament_name: title.clone(),
                        date: today,
                        place: entry.place,
                        prize: entry.prize,
                        buyin: buy_in_amount,
                    });
                    if entry.place == 1 {
                        user.stats.wins += 1;
                    }
                    if entry.prize > 0 {
                        user.stats.cashes += 1;
                        user.stats.profit += entry.prize - buy_in_amount;
                    }
                    user.stats.rating += rating_delta(entry.place);
                }

                let tournament = doc
                    .tournament_mut(tournament_id)
                    .ok_or(ResultsError::NotFound(tournament_id))?;
                tournament.results = results;
                tournament.status = TournamentStatus::Finished;
                Ok(tournament.clone())
            })
            .await?;

        info!(
            "Recorded {} results for tournament {}",
            tournament.results.len(),
            tournament_id
        );
        Ok(tournament)
    }
}
