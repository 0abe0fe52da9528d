//! Admin web interface for Crisis Alerts.
//!
//! Lets an administrator pick a location and disaster type, raise an alert,
//! and revoke active alerts, via server-rendered HTML plus a JSON API.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use alert_core::AlertRegistry;
use broadcaster::{Broadcaster, LogSink, WebhookSink};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting admin web server");

    let catalog = config.catalog.clone().into_catalog()?;
    info!(
        locations = catalog.locations().len(),
        disaster_types = catalog.disaster_types().len(),
        "Catalog loaded"
    );

    // Start notification delivery
    let mut broadcaster = Broadcaster::new().with_sink(Arc::new(LogSink));
    if let Some(ref url) = config.webhook_url {
        info!(url = %url, "Delivering alerts to webhook");
        broadcaster.add_sink(Arc::new(WebhookSink::new(url.clone())));
    }
    let (handle, _worker) = broadcaster.spawn();

    // Build application state
    let state = AppState::new(AlertRegistry::new(catalog, Arc::new(handle)));

    // Build router
    let app = routes::router()
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Admin web server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
