//! Alert routes.

use alert_core::{ActiveAlert, Alert, AlertId, Catalog, Selection};
use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::state::AppState;

/// Alerts page template.
#[derive(Template)]
#[template(path = "alerts.html")]
pub struct AlertsTemplate {
    pub locations: Vec<OptionView>,
    pub disaster_types: Vec<OptionView>,
    pub alerts: Vec<AlertView>,
}

/// A dropdown entry.
#[derive(Clone, Serialize)]
pub struct OptionView {
    pub value: String,
    pub selected: bool,
}

/// An active alert as shown in the list.
#[derive(Clone, Serialize)]
pub struct AlertView {
    pub id: String,
    pub location: String,
    pub disaster_type: String,
    pub raised_at: String,
    pub map_url: String,
}

/// Request to change the pending selection. Absent fields are left as is.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionUpdate {
    pub location: Option<String>,
    pub disaster_type: Option<String>,
}

/// Revocation result.
#[derive(Serialize)]
pub struct RevokeResponse {
    pub revoked: bool,
    pub alert: Option<ActiveAlert>,
}

impl From<Option<ActiveAlert>> for RevokeResponse {
    fn from(removed: Option<ActiveAlert>) -> Self {
        Self {
            revoked: removed.is_some(),
            alert: removed,
        }
    }
}

/// Render the alerts page.
pub async fn alerts_page(State(state): State<AppState>) -> AlertsTemplate {
    let registry = state.registry.lock().await;
    let selection = registry.selection();
    let catalog = registry.catalog();

    AlertsTemplate {
        locations: option_views(catalog.locations(), &selection.location),
        disaster_types: option_views(catalog.disaster_types(), &selection.disaster_type),
        alerts: registry
            .list_active()
            .into_iter()
            .map(|entry| AlertView {
                id: entry.id.to_string(),
                map_url: entry.alert.map_url(),
                raised_at: entry.raised_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                location: entry.alert.location,
                disaster_type: entry.alert.disaster_type,
            })
            .collect(),
    }
}

/// Get the catalog as JSON.
pub async fn catalog_api(State(state): State<AppState>) -> Json<Catalog> {
    let registry = state.registry.lock().await;
    Json(registry.catalog().clone())
}

/// Get the pending selection.
pub async fn selection_api(State(state): State<AppState>) -> Json<Selection> {
    let registry = state.registry.lock().await;
    Json(registry.selection().clone())
}

/// Update the pending selection.
pub async fn update_selection_api(
    State(state): State<AppState>,
    Json(req): Json<SelectionUpdate>,
) -> Json<Selection> {
    let mut registry = state.registry.lock().await;

    if let Some(location) = req.location {
        registry.set_selected_location(location);
    }
    if let Some(disaster_type) = req.disaster_type {
        registry.set_selected_disaster_type(disaster_type);
    }

    Json(registry.selection().clone())
}

/// List active alerts in creation order.
pub async fn list_api(State(state): State<AppState>) -> Json<Vec<ActiveAlert>> {
    let registry = state.registry.lock().await;
    Json(registry.list_active())
}

/// Raise an alert from the pending selection.
pub async fn confirm_api(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ActiveAlert>)> {
    let mut registry = state.registry.lock().await;
    let entry = registry.confirm_alert()?;

    info!(alert_id = %entry.id, alert = %entry.alert, "Alert confirmed by admin");

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Revoke the first alert matching a location and disaster type.
pub async fn revoke_alert_api(
    State(state): State<AppState>,
    Json(alert): Json<Alert>,
) -> Json<RevokeResponse> {
    let mut registry = state.registry.lock().await;
    Json(registry.revoke_alert(&alert).into())
}

/// Revoke an alert by identifier.
pub async fn revoke_api(
    State(state): State<AppState>,
    Path(id): Path<AlertId>,
) -> Json<RevokeResponse> {
    let mut registry = state.registry.lock().await;
    Json(registry.revoke(&id).into())
}

fn option_views(options: &[String], selected: &str) -> Vec<OptionView> {
    options
        .iter()
        .map(|value| OptionView {
            selected: value == selected,
            value: value.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use alert_core::AlertRegistry;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use axum::Router;
    use mock_notifier::RecordingNotifier;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> (Router, RecordingNotifier) {
        let notifier = RecordingNotifier::new();
        let registry = AlertRegistry::new(Catalog::default(), Arc::new(notifier.clone()));
        let app = crate::routes::router().with_state(AppState::new(registry));
        (app, notifier)
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();
        let (status, body) = call(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_catalog_and_default_selection() {
        let (app, _) = app();

        let (_, catalog) = call(&app, Method::GET, "/api/catalog", None).await;
        assert_eq!(catalog["locations"][0], "Bangalore");
        assert_eq!(catalog["disaster_types"][9], "Forest Fire");

        let (_, selection) = call(&app, Method::GET, "/api/selection", None).await;
        assert_eq!(selection, json!({"location": "Bangalore", "disaster_type": "Earthquake"}));
    }

    #[tokio::test]
    async fn test_select_confirm_and_list() {
        let (app, notifier) = app();

        let (status, selection) = call(
            &app,
            Method::PUT,
            "/api/selection",
            Some(json!({"location": "JP Nagar", "disaster_type": "Flood"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(selection["location"], "JP Nagar");

        let (status, created) = call(&app, Method::POST, "/api/alerts", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["location"], "JP Nagar");
        assert_eq!(created["disaster_type"], "Flood");

        let (_, list) = call(&app, Method::GET, "/api/alerts", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["id"], created["id"]);
        assert_eq!(notifier.count(), 1);
    }

    #[tokio::test]
    async fn test_confirm_incomplete_selection() {
        let (app, notifier) = app();

        call(&app, Method::PUT, "/api/selection", Some(json!({"location": ""}))).await;
        let (status, body) = call(&app, Method::POST, "/api/alerts", None).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("must be selected"));
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_revoke_by_value_and_id() {
        let (app, _) = app();

        let (_, first) = call(&app, Method::POST, "/api/alerts", None).await;
        call(&app, Method::PUT, "/api/selection", Some(json!({"disaster_type": "Flood"}))).await;
        call(&app, Method::POST, "/api/alerts", None).await;

        let (_, revoked) = call(
            &app,
            Method::POST,
            "/api/alerts/revoke",
            Some(json!({"location": "Bangalore", "disaster_type": "Flood"})),
        )
        .await;
        assert_eq!(revoked["revoked"], true);
        assert_eq!(revoked["alert"]["disaster_type"], "Flood");

        let uri = format!("/api/alerts/{}", first["id"].as_str().unwrap());
        let (_, revoked) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(revoked["revoked"], true);

        // Idempotent
        let (status, revoked) = call(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(revoked["revoked"], false);

        let (_, list) = call(&app, Method::GET, "/api/alerts", None).await;
        assert!(list.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_alerts_page_renders() {
        let (app, _) = app();
        call(&app, Method::POST, "/api/alerts", None).await;

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Alerts List"));
        assert!(html.contains("<option value=\"Bangalore\" selected>"));
        assert!(html.contains("openstreetmap.org/search?query=Bangalore"));
    }
}
