//! Broadcast utilities for Crisis Alerts.
//!
//! This crate delivers confirmed alerts to external sinks without blocking
//! the registry. [`Broadcaster::spawn`] starts a background worker and returns
//! a [`BroadcastHandle`], which implements [`alert_core::Notifier`] by
//! queueing an [`AlertNotice`] on an unbounded channel.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use alert_core::{AlertRegistry, Catalog};
//! use broadcaster::{Broadcaster, LogSink, WebhookSink};
//!
//! # async fn example() {
//! let (handle, worker) = Broadcaster::new()
//!     .with_sink(Arc::new(LogSink))
//!     .with_sink(Arc::new(WebhookSink::new("https://alerts.example.org/hook")))
//!     .spawn();
//!
//! let mut registry = AlertRegistry::new(Catalog::default(), Arc::new(handle));
//! registry.confirm_alert().unwrap();
//!
//! // Dropping the last handle lets the worker drain and exit.
//! drop(registry);
//! worker.await.unwrap();
//! # }
//! ```

mod error;
mod notice;
mod sink;

use std::sync::Arc;

use alert_core::{ActiveAlert, Notifier};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub use error::BroadcastError;
pub use notice::AlertNotice;
pub use sink::{AlertSink, LogSink, WebhookSink};

/// Outcome of delivering one notice to every sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

/// Fans alert notices out to a set of sinks.
#[derive(Clone, Default)]
pub struct Broadcaster {
    sinks: Vec<Arc<dyn AlertSink>>,
}

impl Broadcaster {
    /// Create a broadcaster with no sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink (builder style).
    pub fn with_sink(mut self, sink: Arc<dyn AlertSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Add a sink.
    pub fn add_sink(&mut self, sink: Arc<dyn AlertSink>) {
        self.sinks.push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Deliver a notice to every sink.
    ///
    /// A failing sink is logged and counted; remaining sinks still run.
    pub async fn deliver(&self, notice: &AlertNotice) -> DeliveryReport {
        let mut report = DeliveryReport::default();

        for sink in &self.sinks {
            match sink.deliver(notice).await {
                Ok(()) => {
                    report.delivered += 1;
                    debug!(alert_id = %notice.id, sink = %sink.name(), "Notice delivered");
                }
                Err(err) => {
                    report.failed += 1;
                    report.errors.push(format!("{}: {}", sink.name(), err));
                    warn!(
                        alert_id = %notice.id,
                        sink = %sink.name(),
                        error = %err,
                        "Sink failed to deliver notice"
                    );
                }
            }
        }

        report
    }

    /// Start the delivery worker on the current tokio runtime.
    ///
    /// The worker runs until every [`BroadcastHandle`] is dropped and the
    /// queue is drained.
    pub fn spawn(self) -> (BroadcastHandle, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<AlertNotice>();

        let worker = tokio::spawn(async move {
            info!(sinks = self.sinks.len(), "Broadcast worker started");

            while let Some(notice) = rx.recv().await {
                let report = self.deliver(&notice).await;
                info!(
                    alert_id = %notice.id,
                    delivered = report.delivered,
                    failed = report.failed,
                    "Broadcast complete"
                );
            }

            info!("Broadcast worker stopped");
        });

        (BroadcastHandle { tx }, worker)
    }
}

/// Queue side of a running broadcaster.
///
/// Cheap to clone; every clone feeds the same worker.
#[derive(Debug, Clone)]
pub struct BroadcastHandle {
    tx: mpsc::UnboundedSender<AlertNotice>,
}

impl BroadcastHandle {
    /// Queue a notice for delivery without waiting for it.
    pub fn enqueue(&self, notice: AlertNotice) -> Result<(), BroadcastError> {
        self.tx.send(notice).map_err(|_| BroadcastError::Closed)
    }

    /// Check if the worker is still accepting notices.
    pub fn is_open(&self) -> bool {
        !self.tx.is_closed()
    }
}

impl Notifier for BroadcastHandle {
    fn notify(&self, alert: &ActiveAlert) {
        if let Err(err) = self.enqueue(AlertNotice::from(alert)) {
            warn!(alert_id = %alert.id, error = %err, "Dropping alert notification");
        }
    }

    fn name(&self) -> &str {
        "BroadcastHandle"
    }
}

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
