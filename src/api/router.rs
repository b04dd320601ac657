use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use super::v1;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Root and health endpoints
        .route("/", get(health::home))
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Service endpoints
        .nest("/v1", v1::create_v1_router())
        // Add state and middleware
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            metrics_middleware,
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
