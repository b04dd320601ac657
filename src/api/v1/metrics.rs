//! Analytics counter endpoints

use axum::extract::State;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::Json;
use crate::domain::MetricsSnapshot;

/// GET /v1/metrics
pub async fn get_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

/// POST /v1/metrics/reset
///
/// Returns the snapshot captured immediately before the reset.
pub async fn reset_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    let previous = state.metrics.reset();

    info!(
        requests = previous.requests,
        errors = previous.errors,
        "Metrics reset"
    );

    Json(previous)
}
