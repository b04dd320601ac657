//! Integration Demo API
//!
//! A demonstration HTTP API used to verify CI and code-quality pipelines:
//! - User registry with CRUD endpoints
//! - Data processing with a content-addressed cache
//! - Password generation, hashing, and token utilities
//! - Process-lifetime request metrics

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{DataProcessor, MetricsCounter, UserRegistry};

/// Create the application state with all services initialized
///
/// Each service is an explicit instance owned by the state; handlers reach
/// them through the cloned state rather than globals.
pub fn create_app_state() -> AppState {
    AppState::new(
        Arc::new(UserRegistry::new()),
        Arc::new(DataProcessor::new()),
        Arc::new(MetricsCounter::new()),
    )
}
