//! Integration tests driving the HTTP router end to end.
//!
//! Each test builds a fresh router over a tempfile-backed store and
//! sends requests with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use pl_server::api::{ADMIN_ID_HEADER, AppState, create_router};
use poker_league::{AdminPolicy, Store};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // For `oneshot` method

const ADMIN: i64 = 777;

/// Router over a fresh store; the tempdir must outlive the test.
async fn test_router() -> (axum::Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(Store::open(dir.path().join("data.json")).await.unwrap());
    let state = AppState::new(store, AdminPolicy::new([ADMIN]), 50);
    (create_router(state), dir)
}

fn request(method: Method, uri: &str, admin: bool, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if admin {
        builder = builder.header(ADMIN_ID_HEADER, ADMIN.to_string());
    }
    match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn new_tournament(title: &str, max_players: u32) -> Value {
    json!({
        "title": title,
        "date": "2026-09-04",
        "buyIn": "$100 entry",
        "prize": "top 3 paid",
        "maxPlayers": max_players,
    })
}

fn registration(tournament_id: &Value, user_id: i64, nickname: &str) -> Value {
    json!({
        "tournamentId": tournament_id,
        "userId": user_id,
        "username": format!("user{user_id}"),
        "nickname": nickname,
        "phone": format!("+{user_id}"),
    })
}

async fn create_tournament(app: &axum::Router, title: &str, max_players: u32) -> Value {
    let (status, body) = send(
        app,
        request(
            Method::POST,
            "/api/tournaments",
            true,
            Some(new_tournament(title, max_players)),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].clone()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let (app, _dir) = test_router().await;
    let (status, body) = send(&app, request(Method::GET, "/health", false, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_tournament_create_requires_admin_header() {
    let (app, _dir) = test_router().await;

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/tournaments",
            false,
            Some(new_tournament("T", 9)),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, request(Method::GET, "/api/tournaments", false, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_tournament_create_rejects_missing_fields() {
    let (app, _dir) = test_router().await;
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/tournaments",
            true,
            Some(json!({"title": "", "date": "x", "buyIn": "x", "prize": "x", "maxPlayers": 9})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn test_registration_full_and_duplicate_rejections() {
    let (app, _dir) = test_router().await;
    let tid = create_tournament(&app, "Friday Freeze", 2).await;

    // A fits; a second registration for A is rejected while seats remain.
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/register",
            false,
            Some(registration(&tid, 1, "nick")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/register",
            false,
            Some(registration(&tid, 1, "nick")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Already registered");

    // B takes the last seat; C finds none.
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/register",
            false,
            Some(registration(&tid, 2, "nick")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/register",
            false,
            Some(registration(&tid, 3, "nick")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No seats left");

    // Once full, even A's duplicate attempt reads as a capacity error.
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/register",
            false,
            Some(registration(&tid, 1, "nick")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No seats left");

    // Cancel A, then C fits.
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/cancel",
            false,
            Some(json!({"tournamentId": tid, "userId": 1})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/register",
            false,
            Some(registration(&tid, 3, "nick")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, request(Method::GET, "/api/check/3", false, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_register_unknown_tournament_is_404() {
    let (app, _dir) = test_router().await;
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/register",
            false,
            Some(registration(&json!(999), 1, "nick")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancel_is_idempotent_over_http() {
    let (app, _dir) = test_router().await;
    for _ in 0..2 {
        let (status, _) = send(
            &app,
            request(
                Method::POST,
                "/api/cancel",
                false,
                Some(json!({"tournamentId": 123, "userId": 1})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_results_update_stats_and_leaderboard() {
    let (app, _dir) = test_router().await;
    let tid = create_tournament(&app, "Main Event", 9).await;

    for user in 1..=4 {
        let (status, _) = send(
            &app,
            request(
                Method::POST,
                "/api/register",
                false,
                Some(registration(&tid, user, &format!("nick{user}"))),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let results = json!([
        {"userId": 1, "place": 1, "prize": 150},
        {"userId": 2, "place": 2},
        {"userId": 3, "place": 3},
        {"userId": 4, "place": 4},
    ]);
    let uri = format!("/api/tournaments/{tid}/results");
    let (status, body) = send(
        &app,
        request(Method::POST, &uri, true, Some(results.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "finished");

    // Resubmission is rejected.
    let (status, _) = send(&app, request(Method::POST, &uri, true, Some(results))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Winner: +50 rating, $100 buy-in against a $150 prize.
    let (status, body) = send(&app, request(Method::GET, "/api/stats/1", false, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["rating"], 1050);
    assert_eq!(body["stats"]["profit"], 50);
    assert_eq!(body["stats"]["cashes"], 1);
    assert_eq!(body["history"][0]["buyin"], 100);

    // Leaderboard is ordered 1, 2, 3, 4 with positional ranks.
    let (status, body) = send(&app, request(Method::GET, "/api/leaderboard", false, None)).await;
    assert_eq!(status, StatusCode::OK);
    let board = body.as_array().unwrap();
    assert_eq!(board.len(), 4);
    assert_eq!(board[0]["userId"], 1);
    assert_eq!(board[0]["rank"], 1);
    assert_eq!(board[3]["userId"], 4);
    assert_eq!(board[3]["rating"], 990);
}

#[tokio::test]
async fn test_results_require_admin() {
    let (app, _dir) = test_router().await;
    let tid = create_tournament(&app, "T", 9).await;
    let uri = format!("/api/tournaments/{tid}/results");
    let (status, _) = send(&app, request(Method::POST, &uri, false, Some(json!([])))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_profile_fetch_creates_and_update_round_trips() {
    let (app, _dir) = test_router().await;

    let (status, body) = send(&app, request(Method::GET, "/api/user/42", false, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stats"]["rating"], 1000);
    assert_eq!(body["isAdmin"], false);

    let (status, body) = send(
        &app,
        request(
            Method::PUT,
            "/api/user/42",
            false,
            Some(json!({"nickname": "Ace"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["nickname"], "Ace");

    // Updating a user nobody has touched is a 404.
    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            "/api/user/43",
            false,
            Some(json!({"nickname": "x"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_check_admin_endpoint() {
    let (app, _dir) = test_router().await;

    let uri = format!("/api/check-admin/{ADMIN}");
    let (status, body) = send(&app, request(Method::GET, &uri, false, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isAdmin"], true);

    let (_, body) = send(&app, request(Method::GET, "/api/check-admin/1", false, None)).await;
    assert_eq!(body["isAdmin"], false);
}

#[tokio::test]
async fn test_delete_tournament_cascades() {
    let (app, _dir) = test_router().await;
    let tid = create_tournament(&app, "T", 9).await;

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/register",
            false,
            Some(registration(&tid, 1, "nick")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/tournaments/{tid}");
    let (status, _) = send(&app, request(Method::DELETE, &uri, true, None)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, request(Method::GET, "/api/check/1", false, None)).await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    // Deleting again is a 404.
    let (status, _) = send(&app, request(Method::DELETE, &uri, true, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
