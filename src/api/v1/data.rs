//! Data processing endpoints

use axum::extract::{Path, State};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::ProcessedRecord;

/// Response for a cache clear operation
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    pub cleared: usize,
}

/// POST /v1/data/process
///
/// The processor itself assumes validated input, so the non-object check
/// lives here at the boundary.
pub async fn process_data(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ProcessedRecord>, ApiError> {
    let Value::Object(data) = body else {
        return Err(ApiError::bad_request("Input must be a JSON object"));
    };

    let record = state.data_processor.process(&data)?;

    debug!(checksum = %record.checksum(), fields = record.fields_count(), "Data processed");

    Ok(Json(record))
}

/// GET /v1/data/cache/{checksum}
pub async fn get_cached(
    State(state): State<AppState>,
    Path(checksum): Path<String>,
) -> Result<Json<ProcessedRecord>, ApiError> {
    let record = state
        .data_processor
        .get_cached(&checksum)?
        .ok_or_else(|| ApiError::not_found(format!("No cached record for '{}'", checksum)))?;

    Ok(Json(record))
}

/// DELETE /v1/data/cache
pub async fn clear_cache(
    State(state): State<AppState>,
) -> Result<Json<ClearCacheResponse>, ApiError> {
    let cleared = state.data_processor.clear_cache()?;

    debug!(cleared, "Cache cleared");

    Ok(Json(ClearCacheResponse { cleared }))
}
