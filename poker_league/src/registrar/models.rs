//! Registration data models.

use crate::tournament::TournamentId;
use crate::users::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration ID type
pub type RegistrationId = i64;

/// The join record binding one user to one tournament.
///
/// At most one registration exists per (tournament, user) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RegistrationId,
    pub tournament_id: TournamentId,
    pub user_id: UserId,
    pub username: String,
    pub nickname: String,
    pub phone: String,
    pub registered_at: DateTime<Utc>,
}
