//! Catalog configuration loaded from environment variables.

use std::env;

use crate::catalog::{Catalog, DEFAULT_DISASTER_TYPES, DEFAULT_LOCATIONS};
use crate::error::ConfigError;

/// Option lists used to build the [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub locations: Vec<String>,
    pub disaster_types: Vec<String>,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ALERT_LOCATIONS` | Comma-separated locations | built-in list |
    /// | `ALERT_DISASTER_TYPES` | Comma-separated disaster types | built-in list |
    pub fn from_env() -> Self {
        Self::from_lists(
            env::var("ALERT_LOCATIONS").ok().as_deref(),
            env::var("ALERT_DISASTER_TYPES").ok().as_deref(),
        )
    }

    /// Build from optional comma-separated lists, falling back to the defaults.
    pub fn from_lists(locations: Option<&str>, disaster_types: Option<&str>) -> Self {
        Self {
            locations: parse_list(locations, DEFAULT_LOCATIONS),
            disaster_types: parse_list(disaster_types, DEFAULT_DISASTER_TYPES),
        }
    }

    /// Validate the lists into a catalog.
    pub fn into_catalog(self) -> Result<Catalog, ConfigError> {
        Ok(Catalog::new(self.locations, self.disaster_types)?)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::from_lists(None, None)
    }
}

fn parse_list(raw: Option<&str>, defaults: &[&str]) -> Vec<String> {
    match raw {
        Some(raw) if !raw.trim().is_empty() => raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => defaults.iter().map(|s| s.to_string()).collect(),
    }
}
