//! Error types for alert-core.

use thiserror::Error;

/// Errors returned by [`AlertRegistry`](crate::AlertRegistry) operations.
///
/// All variants are recoverable: the registry is left unchanged and the
/// notifier is not invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Either the location or the disaster type selection is empty.
    #[error("both a location and a disaster type must be selected")]
    IncompleteSelection,

    /// The selected location is not part of the catalog.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// The selected disaster type is not part of the catalog.
    #[error("unknown disaster type: {0}")]
    UnknownDisasterType(String),
}

/// Errors building a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A list has no entries.
    #[error("{0} list cannot be empty")]
    Empty(&'static str),

    /// Two entries normalize to the same value.
    #[error("duplicate {list} entry: {value}")]
    Duplicate { list: &'static str, value: String },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configured option lists do not form a valid catalog.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}
