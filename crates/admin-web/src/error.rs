//! Error types for the admin web interface.

use alert_core::RegistryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur in the admin web interface.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The registry refused the operation.
    #[error("{0}")]
    Registry(#[from] RegistryError),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AdminError::Registry(err) => {
                tracing::warn!("Registry rejected request: {}", err);
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for admin operations.
pub type Result<T> = std::result::Result<T, AdminError>;
