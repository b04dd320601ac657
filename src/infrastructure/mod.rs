//! Infrastructure layer - Service implementations

pub mod logging;
pub mod metrics;
pub mod processing;
pub mod security;
pub mod user;

pub use metrics::MetricsCounter;
pub use processing::DataProcessor;
pub use user::UserRegistry;
