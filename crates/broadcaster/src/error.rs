//! Error types for broadcaster.

use thiserror::Error;

/// Errors that can occur while delivering alert notices.
///
/// These never reach the registry; the worker logs them per sink.
#[derive(Debug, Error)]
pub enum BroadcastError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The sink answered with a non-success status.
    #[error("sink rejected notice (HTTP {status})")]
    Rejected { status: u16 },

    /// The broadcast worker is no longer running.
    #[error("broadcast worker closed")]
    Closed,
}
