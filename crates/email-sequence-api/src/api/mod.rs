//! HTTP API for the email sequence service.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::{logging_middleware, require_api_key};
pub use types::*;

use crate::auth::ApiKey;
use crate::registry::Registry;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Client registry; registration takes the write lock
    pub registry: Arc<RwLock<Registry>>,
    /// Shared secret verifier
    pub api_key: Arc<ApiKey>,
}

impl AppState {
    /// Create new application state.
    pub fn new(registry: Registry, api_key: ApiKey) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            api_key: Arc::new(api_key),
        }
    }
}

/// Create the API router.
///
/// `/` is public; every other route requires the shared API key.
pub fn create_router(state: AppState) -> Router {
    let guarded = Router::new()
        .route("/register_client", post(handlers::register_client))
        .route("/trigger_sequence", post(handlers::trigger_sequence))
        .route("/clients", get(handlers::list_clients))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/", get(handlers::service_info))
        .merge(guarded)
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
