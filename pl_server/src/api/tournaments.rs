//! Tournament management API handlers.
//!
//! Listing is public; create, update, delete, and result submission
//! are gated on the admin allow-list via the `x-admin-id` header.
//!
//! # Examples
//!
//! List tournaments:
//! ```bash
//! curl http://localhost:3000/api/tournaments
//! ```
//!
//! Create a tournament:
//! ```bash
//! curl -X POST http://localhost:3000/api/tournaments \
//!   -H "x-admin-id: 12345" \
//!   -H "Content-Type: application/json" \
//!   -d '{"title":"Friday Freeze","date":"2026-09-04","buyIn":"$100","prize":"70/30","maxPlayers":9}'
//! ```

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use poker_league::tournament::{
    NewTournament, ResultEntry, Tournament, TournamentError, TournamentId, TournamentUpdate,
};
use poker_league::results::ResultsError;

use super::{api_error, caller_id, ApiError, AppState};

fn tournament_error(e: TournamentError) -> ApiError {
    let status = match &e {
        TournamentError::NotFound(_) => StatusCode::NOT_FOUND,
        TournamentError::MissingField(_) => StatusCode::BAD_REQUEST,
        TournamentError::CapacityBelowRoster(_) => StatusCode::BAD_REQUEST,
        TournamentError::Forbidden => StatusCode::FORBIDDEN,
        TournamentError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    match e {
        TournamentError::Storage(_) => api_error(status, "Internal server error"),
        other => api_error(status, other.to_string()),
    }
}

fn results_error(e: ResultsError) -> ApiError {
    let status = match &e {
        ResultsError::NotFound(_) => StatusCode::NOT_FOUND,
        ResultsError::Forbidden => StatusCode::FORBIDDEN,
        ResultsError::AlreadyFinished => StatusCode::BAD_REQUEST,
        ResultsError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    match e {
        ResultsError::Storage(_) => api_error(status, "Internal server error"),
        other => api_error(status, other.to_string()),
    }
}

/// List all tournaments.
///
/// Public, read-only snapshot. Returns `200 OK` with the full
/// tournament list including rosters and recorded results.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Tournament>> {
    Json(state.tournaments.list().await)
}

/// Create a tournament (admin).
///
/// # Errors
///
/// - `400 Bad Request`: a required field is missing or empty
/// - `403 Forbidden`: caller is not on the admin allow-list
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<NewTournament>,
) -> Result<Json<Tournament>, ApiError> {
    let caller = caller_id(&headers)?;
    state
        .tournaments
        .create(caller, request)
        .await
        .map(Json)
        .map_err(tournament_error)
}

/// Apply a partial tournament update (admin).
///
/// # Errors
///
/// - `403 Forbidden`: caller is not on the admin allow-list
/// - `404 Not Found`: tournament doesn't exist
pub async fn update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<TournamentId>,
    Json(request): Json<TournamentUpdate>,
) -> Result<Json<Tournament>, ApiError> {
    let caller = caller_id(&headers)?;
    state
        .tournaments
        .update(caller, id, request)
        .await
        .map(Json)
        .map_err(tournament_error)
}

/// Delete a tournament and its registrations (admin).
///
/// # Errors
///
/// - `403 Forbidden`: caller is not on the admin allow-list
/// - `404 Not Found`: tournament doesn't exist
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<TournamentId>,
) -> Result<StatusCode, ApiError> {
    let caller = caller_id(&headers)?;
    state
        .tournaments
        .delete(caller, id)
        .await
        .map(|()| StatusCode::OK)
        .map_err(tournament_error)
}

/// Record a ranked result sheet for a tournament (admin).
///
/// Finishes the tournament and updates every listed participant's
/// stats, history, and rating. Submitting results twice is rejected.
///
/// # Request Body
///
/// ```json
/// [
///   {"userId": 1, "place": 1, "prize": 500},
///   {"userId": 2, "place": 2}
/// ]
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: results were already recorded
/// - `403 Forbidden`: caller is not on the admin allow-list
/// - `404 Not Found`: tournament doesn't exist
pub async fn submit_results(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<TournamentId>,
    Json(request): Json<Vec<ResultEntry>>,
) -> Result<Json<Tournament>, ApiError> {
    let caller = caller_id(&headers)?;
    state
        .results
        .apply(caller, id, request)
        .await
        .map(Json)
        .map_err(results_error)
}
