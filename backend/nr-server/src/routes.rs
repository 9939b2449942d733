use crate::{
    AppState, delete_nurse, find_nurse_by_name, get_nurse, health, list_nurses, login_nurse,
    register_nurse, update_nurse,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Nurse endpoints
        .route("/nurse/register", post(register_nurse))
        .route("/nurse/login", post(login_nurse))
        .route("/nurse/index", get(list_nurses))
        .route("/nurse/name/{name}", get(find_nurse_by_name))
        .route(
            "/nurse/{id}",
            get(get_nurse).put(update_nurse).delete(delete_nurse),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
