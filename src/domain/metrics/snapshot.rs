//! Metrics snapshot entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time view of the request counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Total requests recorded since the start timestamp
    pub requests: u64,
    /// Requests that completed with a status of 400 or above
    pub errors: u64,
    /// When counting began
    pub start_time: DateTime<Utc>,
    /// Seconds elapsed since `start_time` at snapshot time
    pub uptime_seconds: i64,
    /// Errors as a percentage of requests; 0.0 when nothing recorded
    pub error_rate: f64,
}

impl MetricsSnapshot {
    /// Build a snapshot, deriving uptime and error rate
    ///
    /// The rate denominator is clamped to at least one request so an idle
    /// counter reports 0% instead of dividing by zero.
    pub fn compute(requests: u64, errors: u64, start_time: DateTime<Utc>) -> Self {
        let uptime_seconds = (Utc::now() - start_time).num_seconds();
        let error_rate = (errors as f64 / requests.max(1) as f64) * 100.0;

        Self {
            requests,
            errors,
            start_time,
            uptime_seconds,
            error_rate,
        }
    }
}
