//! Tournament data models.

use crate::users::UserId;
use serde::{Deserialize, Serialize};

/// Tournament ID type
pub type TournamentId = i64;

/// Tournament lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    /// Accepting registrations
    Open,
    /// Results recorded
    Finished,
}

/// Roster entry for a registered player
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub user_id: UserId,
    pub nickname: String,
    #[serde(default)]
    pub phone: String,
}

/// One line of a submitted result sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEntry {
    pub user_id: UserId,
    /// 1-based finishing place
    pub place: u32,
    /// Prize amount, zero when out of the money
    #[serde(default)]
    pub prize: i64,
}

/// A scheduled poker tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub title: String,
    /// Display date, shown as entered
    pub date: String,
    /// Display buy-in; may embed non-numeric characters ("$100 entry")
    pub buy_in: String,
    /// Prize description
    pub prize: String,
    pub max_players: usize,
    /// Ordered roster; never longer than `max_players`
    #[serde(default)]
    pub players: Vec<RosterEntry>,
    pub status: TournamentStatus,
    #[serde(default)]
    pub results: Vec<ResultEntry>,
}

impl Tournament {
    /// Fresh open tournament with an empty roster.
    pub fn new(
        id: TournamentId,
        title: String,
        date: String,
        buy_in: String,
        prize: String,
        max_players: usize,
    ) -> Self {
        Self {
            id,
            title,
            date,
            buy_in,
            prize,
            max_players,
            players: Vec::new(),
            status: TournamentStatus::Open,
            results: Vec::new(),
        }
    }

    /// Whether the roster is at capacity.
    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }

    /// Buy-in amount for profit accounting: the digits of the display
    /// string read as one integer, 0 when there are none.
    pub fn buy_in_amount(&self) -> i64 {
        let digits: String = self.buy_in.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().unwrap_or(0)
    }
}
