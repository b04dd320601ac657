//! v1 API endpoints

pub mod data;
pub mod metrics;
pub mod security;
pub mod users;

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/data/process", post(data::process_data))
        .route("/data/cache", delete(data::clear_cache))
        .route("/data/cache/{checksum}", get(data::get_cached))
        .route("/security/password", post(security::generate_password))
        .route("/security/password/hash", post(security::hash_password))
        .route("/security/password/verify", post(security::verify_password))
        .route("/security/token", post(security::generate_token))
        .route("/metrics", get(metrics::get_metrics))
        .route("/metrics/reset", post(metrics::reset_metrics))
}
