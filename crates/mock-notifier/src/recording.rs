//! Recording notifier - remembers every alert it is handed.

use std::sync::{Arc, Mutex, MutexGuard};

use alert_core::{ActiveAlert, Alert, Notifier};

/// A notifier that records alerts for later assertions.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notified: Arc<Mutex<Vec<ActiveAlert>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All alerts notified so far, oldest first.
    pub fn notified(&self) -> Vec<ActiveAlert> {
        self.lock().clone()
    }

    /// The alert pairs notified so far, oldest first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.lock().iter().map(|entry| entry.alert.clone()).collect()
    }

    pub fn count(&self) -> usize {
        self.lock().len()
    }

    pub fn last(&self) -> Option<ActiveAlert> {
        self.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ActiveAlert>> {
        // A panic while holding the lock only happens inside a failing test.
        self.notified.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, alert: &ActiveAlert) {
        self.lock().push(alert.clone());
    }

    fn name(&self) -> &str {
        "RecordingNotifier"
    }
}
