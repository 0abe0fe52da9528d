//! Alert types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Base URL used for the "Map" action on an alert.
const MAP_SEARCH_URL: &str = "https://www.openstreetmap.org/search?query=";

/// A disaster alert for a location.
///
/// Alerts compare structurally: two alerts with the same location and
/// disaster type are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alert {
    pub location: String,
    pub disaster_type: String,
}

impl Alert {
    pub fn new(location: impl Into<String>, disaster_type: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            disaster_type: disaster_type.into(),
        }
    }

    /// Render the alert into a short notice message.
    pub fn render_notice(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("{} alert: {}", self.disaster_type, self.location));
        lines.push(format!(
            "A {} has been reported in {}. Follow local safety instructions.",
            self.disaster_type.to_lowercase(),
            self.location
        ));
        lines.join("\n")
    }

    /// Map search URL for the alert location.
    pub fn map_url(&self) -> String {
        format!("{}{}", MAP_SEARCH_URL, urlencoding::encode(&self.location))
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.disaster_type, self.location)
    }
}

/// Unique identifier for an active alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(Uuid);

impl AlertId {
    /// Create a new random alert ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AlertId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AlertId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An alert held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveAlert {
    pub id: AlertId,
    #[serde(flatten)]
    pub alert: Alert,
    pub raised_at: DateTime<Utc>,
}

impl ActiveAlert {
    /// Wrap an alert with a fresh identifier, raised now.
    pub fn raise(alert: Alert) -> Self {
        Self {
            id: AlertId::new(),
            alert,
            raised_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_structural_equality() {
        let a = Alert::new("Bangalore", "Earthquake");
        let b = Alert::new("Bangalore", "Earthquake");
        let c = Alert::new("Bangalore", "Flood");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_render_notice() {
        let alert = Alert::new("JP Nagar", "Heat Wave");
        let notice = alert.render_notice();

        assert!(notice.starts_with("Heat Wave alert: JP Nagar\n"));
        assert!(notice.contains("A heat wave has been reported in JP Nagar."));
    }

    #[test]
    fn test_map_url_encodes_location() {
        let alert = Alert::new("JP Nagar", "Flood");
        assert_eq!(
            alert.map_url(),
            "https://www.openstreetmap.org/search?query=JP%20Nagar"
        );
    }

    #[test]
    fn test_raise_assigns_distinct_ids() {
        let first = ActiveAlert::raise(Alert::new("Bangalore", "Fire"));
        let second = ActiveAlert::raise(Alert::new("Bangalore", "Fire"));

        assert_eq!(first.alert, second.alert);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_active_alert_serializes_flat() {
        let entry = ActiveAlert::raise(Alert::new("Jayanagar", "Cyclone"));
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["location"], "Jayanagar");
        assert_eq!(json["disaster_type"], "Cyclone");
        assert_eq!(json["id"], entry.id.to_string());
    }
}
