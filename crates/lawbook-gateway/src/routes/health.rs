//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{AppState, HEALTH_PATH};

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(HEALTH_PATH, get(health_check))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded".
    pub status: String,
    /// Service name.
    pub service: String,
    /// Gateway version.
    pub version: String,
    /// Whether a store connection could be obtained.
    pub database_connected: bool,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_connected = state.store.ping().await.is_ok();

    Json(HealthResponse {
        status: if database_connected { "healthy" } else { "degraded" }.to_string(),
        service: "lawbook-gateway".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database_connected,
    })
}
