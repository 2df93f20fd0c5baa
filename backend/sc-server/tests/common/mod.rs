#![allow(dead_code)]

//! Test infrastructure for sc-server API tests

use sc_db::{DatabaseGateway, ProjectRequestRepository};
use sc_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

/// AppState over a fresh file-backed store inside `dir`; nothing is opened yet
pub fn create_test_app_state(dir: &TempDir) -> AppState {
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("requests.db").display()
    );
    AppState::new(DatabaseGateway::new(url, 5))
}

/// AppState whose store can never be opened
pub fn create_unreachable_app_state(dir: &TempDir) -> AppState {
    let url = format!(
        "sqlite://{}?mode=rw",
        dir.path().join("missing").join("requests.db").display()
    );
    AppState::new(DatabaseGateway::new(url, 5))
}

/// The example submission from the request form
pub fn valid_submission() -> Value {
    json!({
        "name": "Asha",
        "email": "asha@example.com",
        "phone": "9876543210",
        "projectName": "Solar Tracker",
        "category": "Electronics",
        "description": "Arduino-based dual-axis solar tracker",
        "deadline": "2025-03-01",
    })
}

/// POST a raw body to the submission endpoint
pub async fn post_raw(state: &AppState, body: impl Into<Body>) -> (StatusCode, Value) {
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/project-request")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}

/// POST a JSON value to the submission endpoint
pub async fn post_submission(state: &AppState, submission: &Value) -> (StatusCode, Value) {
    post_raw(state, submission.to_string()).await
}

/// Number of stored project requests
pub async fn stored_count(state: &AppState) -> i64 {
    let pool = state.gateway.pool().await.unwrap();
    ProjectRequestRepository::new(pool.clone())
        .count()
        .await
        .unwrap()
}
