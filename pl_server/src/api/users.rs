//! User profile, stats, and leaderboard API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use poker_league::leaderboard::LeaderboardEntry;
use poker_league::users::{DirectoryError, HistoryEntry, ProfileUpdate, User, UserId, UserStats};
use serde::Serialize;
use serde_json::json;

use super::{api_error, ApiError, AppState};

/// Profile response: the stored record plus the derived admin flag.
///
/// `isAdmin` is recomputed from the allow-list on every response and
/// never persisted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: User,
    pub is_admin: bool,
}

/// Stats response for one user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub stats: UserStats,
    pub history: Vec<HistoryEntry>,
    pub achievements: Vec<serde_json::Value>,
}

fn directory_error(e: DirectoryError) -> ApiError {
    match e {
        DirectoryError::NotFound(_) => api_error(StatusCode::NOT_FOUND, e.to_string()),
        DirectoryError::Storage(_) => {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    }
}

/// Fetch a profile, creating it on first contact.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .users
        .get_or_create(user_id, None)
        .await
        .map_err(directory_error)?;
    let is_admin = state.policy.is_admin(user_id);
    Ok(Json(ProfileResponse { user, is_admin }))
}

/// Apply a partial profile update.
///
/// # Errors
///
/// - `404 Not Found`: user doesn't exist (updating never creates one)
pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
    Json(request): Json<ProfileUpdate>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .users
        .update_profile(user_id, request)
        .await
        .map_err(directory_error)?;
    let is_admin = state.policy.is_admin(user_id);
    Ok(Json(ProfileResponse { user, is_admin }))
}

/// A user's stats, history, and achievements.
///
/// # Errors
///
/// - `404 Not Found`: user doesn't exist
pub async fn stats(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<StatsResponse>, ApiError> {
    let user = state.users.get(user_id).await.map_err(directory_error)?;
    Ok(Json(StatsResponse {
        stats: user.stats,
        history: user.history,
        achievements: user.achievements,
    }))
}

/// Admin allow-list check.
pub async fn check_admin(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<serde_json::Value> {
    Json(json!({ "isAdmin": state.policy.is_admin(user_id) }))
}

/// Ranked leaderboard, capped at the configured size.
pub async fn leaderboard(State(state): State<AppState>) -> Json<Vec<LeaderboardEntry>> {
    Json(state.leaderboard.top_n(state.leaderboard_size).await)
}
