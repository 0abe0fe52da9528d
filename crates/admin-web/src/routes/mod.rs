//! Route handlers for the admin web interface.

pub mod alerts;
pub mod health;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML pages
        .route("/", get(alerts::alerts_page))
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/catalog", get(alerts::catalog_api))
        .route(
            "/api/selection",
            get(alerts::selection_api).put(alerts::update_selection_api),
        )
        .route("/api/alerts", get(alerts::list_api).post(alerts::confirm_api))
        .route("/api/alerts/revoke", post(alerts::revoke_alert_api))
        .route("/api/alerts/:id", delete(alerts::revoke_api))
}
