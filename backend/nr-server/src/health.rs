use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - process and store status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = match state.store.count().await {
        Ok(_) => "operational",
        Err(e) => {
            log::error!("Health check could not reach the store: {}", e);
            "unavailable"
        }
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - readiness probe; ready once the store answers
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.store.count().await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Not ready: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}
