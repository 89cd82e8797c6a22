//! HTTP API for the poker league server.
//!
//! # Endpoints Overview
//!
//! ## Tournaments
//! - `GET    /api/tournaments` - List tournaments (public)
//! - `POST   /api/tournaments` - Create tournament (admin)
//! - `PUT    /api/tournaments/{id}` - Update tournament (admin)
//! - `DELETE /api/tournaments/{id}` - Delete tournament (admin)
//! - `POST   /api/tournaments/{id}/results` - Record results (admin)
//!
//! ## Registration
//! - `POST /api/register` - Register for a tournament
//! - `POST /api/cancel` - Cancel a registration (idempotent)
//! - `GET  /api/check/{user_id}` - A user's registrations
//!
//! ## Users
//! - `GET  /api/user/{user_id}` - Fetch a profile (creates it on first contact)
//! - `PUT  /api/user/{user_id}` - Update a profile
//! - `GET  /api/stats/{user_id}` - Stats, history, and achievements
//! - `GET  /api/check-admin/{user_id}` - Admin allow-list check
//! - `GET  /api/leaderboard` - Ranked leaderboard
//!
//! ## Health Check
//! - `GET /health` - Server health status
//!
//! # Authorization
//!
//! Admin endpoints read the caller's user id from the `x-admin-id`
//! header and compare it against the configured allow-list. This is a
//! deliberately weak trust model: whoever can state an admin's id is
//! treated as that admin.

pub mod registrations;
pub mod request_id;
pub mod tournaments;
pub mod users;

use axum::{
    Router,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post, put},
};
use poker_league::{
    AdminPolicy, Store, leaderboard::Leaderboard, registrar::Registrar,
    results::ResultsProcessor, tournament::TournamentManager, users::UserDirectory,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Header carrying the caller id for admin-gated operations.
pub const ADMIN_ID_HEADER: &str = "x-admin-id";

/// Application state shared across all HTTP handlers.
///
/// Cloned per request (cheap, everything shares one `Arc<Store>`).
#[derive(Clone)]
pub struct AppState {
    pub tournaments: TournamentManager,
    pub registrar: Registrar,
    pub results: ResultsProcessor,
    pub users: UserDirectory,
    pub leaderboard: Leaderboard,
    pub policy: AdminPolicy,
    pub leaderboard_size: usize,
}

impl AppState {
    /// Wire all managers around one shared store.
    pub fn new(store: Arc<Store>, policy: AdminPolicy, leaderboard_size: usize) -> Self {
        Self {
            tournaments: TournamentManager::new(store.clone(), policy.clone()),
            registrar: Registrar::new(store.clone()),
            results: ResultsProcessor::new(store.clone(), policy.clone()),
            users: UserDirectory::new(store.clone()),
            leaderboard: Leaderboard::new(store),
            policy,
            leaderboard_size,
        }
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Handler error type: status code plus JSON error body.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Caller id for admin-gated operations, taken from the admin header.
pub(crate) fn caller_id(headers: &HeaderMap) -> Result<i64, ApiError> {
    headers
        .get(ADMIN_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| api_error(StatusCode::FORBIDDEN, "Admin access required"))
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/tournaments",
            get(tournaments::list).post(tournaments::create),
        )
        .route(
            "/tournaments/{id}",
            put(tournaments::update).delete(tournaments::remove),
        )
        .route("/tournaments/{id}/results", post(tournaments::submit_results))
        .route("/register", post(registrations::register))
        .route("/cancel", post(registrations::cancel))
        .route("/check/{user_id}", get(registrations::check))
        .route(
            "/user/{user_id}",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/check-admin/{user_id}", get(users::check_admin))
        .route("/stats/{user_id}", get(users::stats))
        .route("/leaderboard", get(users::leaderboard));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancers.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
