use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Process status plus store connection state.
///
/// Does not open the store; see `/ready` for that.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_state = if state.gateway.is_connected() {
        "connected"
    } else {
        "not_connected"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": {
                "state": database_state,
                "connect_attempts": state.gateway.connect_attempts(),
            },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness check (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness check. Connects to the store if needed.
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.gateway.ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}
