//! Recording and failing sinks for the broadcaster worker.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use broadcaster::{AlertNotice, AlertSink, BroadcastError};

/// A sink that records every notice it receives.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    received: Arc<Mutex<Vec<AlertNotice>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn received(&self) -> Vec<AlertNotice> {
        self.received
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.received().len()
    }
}

#[async_trait]
impl AlertSink for RecordingSink {
    async fn deliver(&self, notice: &AlertNotice) -> Result<(), BroadcastError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(notice.clone());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "RecordingSink"
    }
}

/// A sink that rejects every notice with the configured status.
#[derive(Debug, Clone)]
pub struct FailingSink {
    status: u16,
}

impl FailingSink {
    pub fn new(status: u16) -> Self {
        Self { status }
    }
}

impl Default for FailingSink {
    fn default() -> Self {
        Self::new(500)
    }
}

#[async_trait]
impl AlertSink for FailingSink {
    async fn deliver(&self, _notice: &AlertNotice) -> Result<(), BroadcastError> {
        Err(BroadcastError::Rejected {
            status: self.status,
        })
    }

    fn name(&self) -> &str {
        "FailingSink"
    }
}
