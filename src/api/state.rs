//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::{DataProcessor, MetricsCounter, UserRegistry};

/// Application state containing the service instances
///
/// The HTTP layer owns one instance per service and clones the state into
/// each handler; there are no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub user_registry: Arc<UserRegistry>,
    pub data_processor: Arc<DataProcessor>,
    pub metrics: Arc<MetricsCounter>,
}

impl AppState {
    pub fn new(
        user_registry: Arc<UserRegistry>,
        data_processor: Arc<DataProcessor>,
        metrics: Arc<MetricsCounter>,
    ) -> Self {
        Self {
            user_registry,
            data_processor,
            metrics,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(UserRegistry::new()),
            Arc::new(DataProcessor::new()),
            Arc::new(MetricsCounter::new()),
        )
    }
}
