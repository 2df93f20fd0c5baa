use crate::{AppState, MAX_SUBMISSION_BYTES, health, submit_project_request};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Submission endpoint
        .route(
            "/api/project-request",
            post(submit_project_request).layer(DefaultBodyLimit::max(MAX_SUBMISSION_BYTES)),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        // The request form is served from a different origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
