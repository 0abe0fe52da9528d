//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use alert_core::CatalogConfig;

/// Admin web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Optional webhook receiving every confirmed alert.
    pub webhook_url: Option<String>,
    /// Locations and disaster types offered to the administrator.
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ADMIN_ADDR` | Server bind address | `127.0.0.1:8788` |
    /// | `ALERT_WEBHOOK_URL` | Webhook for alert notices | (none) |
    /// | `ALERT_LOCATIONS` | Comma-separated locations | built-in list |
    /// | `ALERT_DISASTER_TYPES` | Comma-separated disaster types | built-in list |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("ADMIN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8788".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let webhook_url = env::var("ALERT_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        if let Some(ref url) = webhook_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidWebhookUrl(url.clone()));
            }
        }

        Ok(Self {
            addr,
            webhook_url,
            catalog: CatalogConfig::from_env(),
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ADMIN_ADDR format")]
    InvalidAddr,

    #[error("ALERT_WEBHOOK_URL must be an http(s) URL, got {0}")]
    InvalidWebhookUrl(String),
}
