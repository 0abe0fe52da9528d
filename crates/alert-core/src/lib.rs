//! Core types and the active alerts registry for Crisis Alerts.
//!
//! This crate provides the shared domain model used by every Crisis Alerts
//! component. It defines:
//!
//! - [`Alert`] / [`ActiveAlert`] - An alert pairing and its registry entry
//! - [`Catalog`] - The enumerated locations and disaster types an alert may use
//! - [`Notifier`] - The port invoked once for every confirmed alert
//! - [`AlertRegistry`] - The authoritative, ordered set of active alerts
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use alert_core::{AlertRegistry, Catalog, LoggingNotifier};
//!
//! let mut registry = AlertRegistry::new(Catalog::default(), Arc::new(LoggingNotifier));
//!
//! registry.set_selected_location("JP Nagar");
//! registry.set_selected_disaster_type("Flood");
//! let entry = registry.confirm_alert().unwrap();
//!
//! assert_eq!(entry.alert.location, "JP Nagar");
//! assert_eq!(registry.list_active().len(), 1);
//!
//! registry.revoke(&entry.id);
//! assert!(registry.list_active().is_empty());
//! ```

mod alert;
mod catalog;
pub mod config;
mod error;
mod notifier;
mod registry;

pub use alert::{ActiveAlert, Alert, AlertId};
pub use catalog::{normalize_option, Catalog, DEFAULT_DISASTER_TYPES, DEFAULT_LOCATIONS};
pub use config::CatalogConfig;
pub use error::{CatalogError, ConfigError, RegistryError};
pub use notifier::{LoggingNotifier, NoOpNotifier, Notifier};
pub use registry::{AlertRegistry, Selection};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
