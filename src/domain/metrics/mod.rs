//! Metrics domain

mod snapshot;

pub use snapshot::MetricsSnapshot;
