//! Delivery sinks driven by the broadcast worker.

use async_trait::async_trait;
use tracing::info;

use crate::error::BroadcastError;
use crate::notice::AlertNotice;

/// A delivery target for alert notices.
///
/// Abstracted to support different transports (webhooks, logs, tests).
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Deliver a single notice.
    async fn deliver(&self, notice: &AlertNotice) -> Result<(), BroadcastError>;

    /// Get a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A sink that logs every notice.
#[derive(Debug, Clone, Default)]
pub struct LogSink;

#[async_trait]
impl AlertSink for LogSink {
    async fn deliver(&self, notice: &AlertNotice) -> Result<(), BroadcastError> {
        info!(
            alert_id = %notice.id,
            location = %notice.location,
            disaster_type = %notice.disaster_type,
            "{}",
            notice.message
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "LogSink"
    }
}

/// A sink that POSTs each notice as JSON to a URL.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::Client,
    url: String,
}

impl WebhookSink {
    /// Create a webhook sink with a default HTTP client.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Create a webhook sink sharing an existing HTTP client.
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AlertSink for WebhookSink {
    async fn deliver(&self, notice: &AlertNotice) -> Result<(), BroadcastError> {
        let response = self.client.post(&self.url).json(notice).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BroadcastError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "WebhookSink"
    }
}
