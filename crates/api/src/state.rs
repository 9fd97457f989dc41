//! Application state for the API server.

use tandem_coordinator::{Coordinator, CoordinatorConfig, SimpleResponder};

/// Shared application state for the API server.
///
/// The coordinator is immutable after construction, so no locking is
/// needed; handlers share it behind an `Arc`.
pub struct AppState {
    /// The coordinator driving the multi-agent pipeline
    pub coordinator: Coordinator,

    /// Single-agent responder for simple mode
    pub simple: SimpleResponder,

    /// Server start time (for health checks)
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state with the given coordinator
    /// configuration.
    pub fn new(config: CoordinatorConfig) -> Self {
        Self {
            coordinator: Coordinator::new(config),
            simple: SimpleResponder::new(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
