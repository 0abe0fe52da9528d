//! Application state shared across handlers.

use std::sync::Arc;

use alert_core::AlertRegistry;
use tokio::sync::Mutex;

/// Shared application state.
///
/// The admin session owns a single registry; handlers take the lock for the
/// duration of one registry operation.
#[derive(Clone)]
pub struct AppState {
    /// Active alerts and the pending selection.
    pub registry: Arc<Mutex<AlertRegistry>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(registry: AlertRegistry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
        }
    }
}
