//! The notifier port invoked for confirmed alerts.

use crate::alert::ActiveAlert;

/// Receives every alert the registry confirms.
///
/// Notification is one-way: the registry consumes no result and never
/// waits for delivery. Implementations that perform I/O should hand the
/// alert off (e.g. to a channel) and return immediately.
///
/// This trait is object-safe and can be used with `Arc<dyn Notifier>`.
pub trait Notifier: Send + Sync {
    /// Deliver a notification for a newly confirmed alert.
    fn notify(&self, alert: &ActiveAlert);

    /// Get a human-readable name for this notifier.
    fn name(&self) -> &str;
}

/// A notifier that discards all alerts.
#[derive(Debug, Clone, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, _alert: &ActiveAlert) {}

    fn name(&self) -> &str {
        "NoOpNotifier"
    }
}

/// A notifier that logs every alert.
#[derive(Debug, Clone, Default)]
pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn notify(&self, alert: &ActiveAlert) {
        tracing::info!(
            alert_id = %alert.id,
            location = %alert.alert.location,
            disaster_type = %alert.alert.disaster_type,
            "Alert notification"
        );
    }

    fn name(&self) -> &str {
        "LoggingNotifier"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::Alert;

    #[test]
    fn test_noop_notifier() {
        let notifier = NoOpNotifier;
        notifier.notify(&ActiveAlert::raise(Alert::new("Bangalore", "Flood")));
        assert_eq!(notifier.name(), "NoOpNotifier");
    }

    #[test]
    fn test_logging_notifier() {
        let notifier = LoggingNotifier;
        // Should not panic
        notifier.notify(&ActiveAlert::raise(Alert::new("Bangalore", "Flood")));
        assert_eq!(notifier.name(), "LoggingNotifier");
    }
}
