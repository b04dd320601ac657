//! Health check endpoints for monitoring probes

use axum::{http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

/// Health response reported by `/health`
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub service: String,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Root endpoint - confirms the service is reachable
pub async fn home() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Health check - returns 200 with service metadata if running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check - bare 200 for liveness probes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
