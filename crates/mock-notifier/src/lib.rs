//! Mock notifier implementations for testing alert flows.
//!
//! This crate provides test doubles for the Crisis Alerts ports:
//! - `RecordingNotifier` - Records every alert passed to `Notifier::notify`
//! - `RecordingSink` - Records every notice delivered by the broadcaster worker
//! - `FailingSink` - Rejects every notice
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use alert_core::{AlertRegistry, Catalog};
//! use mock_notifier::RecordingNotifier;
//!
//! let notifier = Arc::new(RecordingNotifier::new());
//! let mut registry = AlertRegistry::new(Catalog::default(), notifier.clone());
//!
//! registry.confirm_alert().unwrap();
//! assert_eq!(notifier.count(), 1);
//! ```
//!
//! # Features
//!
//! - `broadcaster`: Enable `RecordingSink` and `FailingSink` for driving the
//!   broadcaster worker in tests.

mod recording;

#[cfg(feature = "broadcaster")]
pub mod sinks;

// Re-export alert-core types for convenience
pub use alert_core::{ActiveAlert, Alert, AlertId, Notifier};

pub use recording::RecordingNotifier;

#[cfg(feature = "broadcaster")]
pub use sinks::{FailingSink, RecordingSink};
