//! Process-lifetime request counters

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::domain::MetricsSnapshot;

#[derive(Debug)]
struct CounterState {
    requests: u64,
    errors: u64,
    start_time: DateTime<Utc>,
}

impl CounterState {
    fn new() -> Self {
        Self {
            requests: 0,
            errors: 0,
            start_time: Utc::now(),
        }
    }
}

/// Counts requests and error responses for the lifetime of the process
#[derive(Debug)]
pub struct MetricsCounter {
    state: RwLock<CounterState>,
}

impl Default for MetricsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCounter {
    /// Create a counter starting now
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CounterState::new()),
        }
    }

    /// Record a completed request; statuses of 400 and above count as errors
    ///
    /// Counting must never fail a request, so a poisoned lock is logged and
    /// the observation dropped.
    pub fn record_request(&self, status_code: u16) {
        match self.state.write() {
            Ok(mut state) => {
                state.requests += 1;
                if status_code >= 400 {
                    state.errors += 1;
                }
            }
            Err(e) => warn!("Dropping metrics observation, lock poisoned: {}", e),
        }
    }

    /// Snapshot the current counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        match self.state.read() {
            Ok(state) => MetricsSnapshot::compute(state.requests, state.errors, state.start_time),
            Err(e) => {
                warn!("Metrics lock poisoned, reporting inner state: {}", e);
                let state = e.into_inner();
                MetricsSnapshot::compute(state.requests, state.errors, state.start_time)
            }
        }
    }

    /// Reset the counters and start time, returning the pre-reset snapshot
    pub fn reset(&self) -> MetricsSnapshot {
        match self.state.write() {
            Ok(mut state) => {
                let previous =
                    MetricsSnapshot::compute(state.requests, state.errors, state.start_time);
                *state = CounterState::new();
                previous
            }
            Err(e) => {
                warn!("Metrics lock poisoned, resetting inner state: {}", e);
                let mut state = e.into_inner();
                let previous =
                    MetricsSnapshot::compute(state.requests, state.errors, state.start_time);
                *state = CounterState::new();
                previous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_request_success() {
        let counter = MetricsCounter::new();
        counter.record_request(200);

        let snapshot = counter.snapshot();
        assert_eq!(snapshot.requests, 1);
        assert_eq!(snapshot.errors, 0);
    }

    #[test]
    fn test_record_request_error() {
        let counter = MetricsCounter::new();
        counter.record_request(200);
        counter.record_request(500);

        let snapshot = counter.snapshot();
        assert_eq!(snapshot.requests, 2);
        assert_eq!(snapshot.errors, 1);
        assert_eq!(snapshot.error_rate, 50.0);
    }

    #[test]
    fn test_status_400_counts_as_error() {
        let counter = MetricsCounter::new();
        counter.record_request(400);
        counter.record_request(399);

        let snapshot = counter.snapshot();
        assert_eq!(snapshot.errors, 1);
    }

    #[test]
    fn test_idle_counter_reports_zero_rate() {
        let counter = MetricsCounter::new();
        let snapshot = counter.snapshot();

        assert_eq!(snapshot.requests, 0);
        assert_eq!(snapshot.errors, 0);
        assert_eq!(snapshot.error_rate, 0.0);
    }

    #[test]
    fn test_reset_returns_previous_snapshot() {
        let counter = MetricsCounter::new();
        counter.record_request(200);
        counter.record_request(500);

        let previous = counter.reset();
        assert_eq!(previous.requests, 2);
        assert_eq!(previous.errors, 1);

        let current = counter.snapshot();
        assert_eq!(current.requests, 0);
        assert_eq!(current.errors, 0);
        assert_eq!(current.error_rate, 0.0);
        assert!(current.start_time >= previous.start_time);
    }
}
