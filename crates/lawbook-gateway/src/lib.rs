//! Lawbook HTTP gateway.
//!
//! Serves the "Add Law" HTML form, handles its submissions, and redirects to a
//! confirmation page once the law is stored.

pub mod config;
pub mod error;
pub mod routes;
pub mod view;

pub use config::{Args, GatewayConfig};
pub use error::AppError;

use std::sync::Arc;

use axum::Router;
use lawbook_core::LawStore;
use tower_http::trace::TraceLayer;

/// Path of the law submission form.
pub const FORM_PATH: &str = "/laws/add";

/// Path of the health check endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Store that submitted laws are written to.
    pub store: Arc<dyn LawStore>,
    /// Gateway configuration.
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new application state.
    pub fn new(store: impl LawStore + 'static, config: GatewayConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::laws::routes(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
