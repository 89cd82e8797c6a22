//! User data models.

use crate::tournament::TournamentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User ID type
pub type UserId = i64;

/// Rating every player starts with.
pub const INITIAL_RATING: i64 = 1000;

/// Nickname/username fallback when a caller supplies neither.
pub const PLACEHOLDER_USERNAME: &str = "unknown";

/// Running statistics for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Tournaments with recorded results this player appeared in
    pub total_games: u32,
    /// First-place finishes
    pub wins: u32,
    /// Finishes with a non-zero prize
    pub cashes: u32,
    /// Sum of prize minus buy-in over all cashes
    pub profit: i64,
    /// Running rating, adjusted only by result submission
    pub rating: i64,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_games: 0,
            wins: 0,
            cashes: 0,
            profit: 0,
            rating: INITIAL_RATING,
        }
    }
}

/// One finished tournament in a player's record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    /// Calendar date the results were recorded
    pub date: NaiveDate,
    pub place: u32,
    pub prize: i64,
    /// Buy-in amount parsed from the tournament's display string
    pub buyin: i64,
}

/// Player profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Externally supplied, stable identifier
    pub id: UserId,
    pub username: String,
    pub nickname: String,
    pub phone: String,
    #[serde(default)]
    pub stats: UserStats,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Opaque to the core; carried through unchanged
    #[serde(default)]
    pub achievements: Vec<serde_json::Value>,
}

impl User {
    /// Fresh profile with zeroed stats and the starting rating.
    ///
    /// The nickname defaults to the username, which itself falls back
    /// to a placeholder when absent.
    pub fn new(id: UserId, username: Option<&str>) -> Self {
        let username = username.unwrap_or(PLACEHOLDER_USERNAME).to_string();
        Self {
            id,
            nickname: username.clone(),
            username,
            phone: String::new(),
            stats: UserStats::default(),
            history: Vec::new(),
            achievements: Vec::new(),
        }
    }
}
