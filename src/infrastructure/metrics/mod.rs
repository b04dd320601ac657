//! Metrics infrastructure

mod counter;

pub use counter::MetricsCounter;
