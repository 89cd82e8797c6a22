//! Registration API handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use poker_league::registrar::{Registration, RegistrarError, RegistrationRequest};
use poker_league::tournament::TournamentId;
use poker_league::users::UserId;
use serde::Deserialize;

use super::{api_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelRequest {
    pub tournament_id: TournamentId,
    pub user_id: UserId,
}

fn registrar_error(e: RegistrarError) -> ApiError {
    let status = match &e {
        RegistrarError::NotFound(_) => StatusCode::NOT_FOUND,
        RegistrarError::NoSeats
        | RegistrarError::AlreadyRegistered
        | RegistrarError::MissingField(_) => StatusCode::BAD_REQUEST,
        RegistrarError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    match e {
        RegistrarError::Storage(_) => api_error(status, "Internal server error"),
        other => api_error(status, other.to_string()),
    }
}

/// Register a user for a tournament.
///
/// Creates the user profile on first contact, but only after the
/// capacity and duplicate checks pass.
///
/// # Request Body
///
/// ```json
/// {
///   "tournamentId": 1756300000000,
///   "userId": 42,
///   "username": "alice",
///   "nickname": "Ace",
///   "phone": "+10000000000"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: no seats left, already registered, or missing fields
/// - `404 Not Found`: tournament doesn't exist
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegistrationRequest>,
) -> Result<Json<Registration>, ApiError> {
    state
        .registrar
        .register(request)
        .await
        .map(Json)
        .map_err(registrar_error)
}

/// Cancel a registration.
///
/// Idempotent: cancelling a registration that does not exist still
/// returns `200 OK`.
pub async fn cancel(
    State(state): State<AppState>,
    Json(request): Json<CancelRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .registrar
        .cancel(request.tournament_id, request.user_id)
        .await
        .map(|()| StatusCode::OK)
        .map_err(registrar_error)
}

/// List a user's registrations.
///
/// Always `200 OK`; a user with no registrations gets an empty list.
pub async fn check(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<Vec<Registration>> {
    Json(state.registrar.registrations_for(user_id).await)
}
