use axum::{extract::State, http::StatusCode, routing::get, Router};
use std::sync::Arc;

use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
}

// GET /
async fn banner(State(state): State<Arc<AppState>>) -> String {
    format!("Reservation API v1.0 ({})", state.config.app.environment)
}

// GET /health
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(e) => {
            tracing::warn!("health check failed: {:?}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE")
        }
    }
}
