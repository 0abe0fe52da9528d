//! Notice payload handed to sinks.

use alert_core::{ActiveAlert, AlertId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A confirmed alert, rendered for delivery.
///
/// This is also the JSON body posted by [`WebhookSink`](crate::WebhookSink).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertNotice {
    pub id: AlertId,
    pub location: String,
    pub disaster_type: String,
    pub message: String,
    pub map_url: String,
    pub raised_at: DateTime<Utc>,
}

impl From<&ActiveAlert> for AlertNotice {
    fn from(entry: &ActiveAlert) -> Self {
        Self {
            id: entry.id,
            location: entry.alert.location.clone(),
            disaster_type: entry.alert.disaster_type.clone(),
            message: entry.alert.render_notice(),
            map_url: entry.alert.map_url(),
            raised_at: entry.raised_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alert_core::Alert;

    #[test]
    fn test_notice_from_entry() {
        let entry = ActiveAlert::raise(Alert::new("JP Nagar", "Flood"));
        let notice = AlertNotice::from(&entry);

        assert_eq!(notice.id, entry.id);
        assert_eq!(notice.location, "JP Nagar");
        assert_eq!(notice.disaster_type, "Flood");
        assert!(notice.message.starts_with("Flood alert: JP Nagar"));
        assert!(notice.map_url.ends_with("JP%20Nagar"));
        assert_eq!(notice.raised_at, entry.raised_at);
    }

    #[test]
    fn test_notice_json_shape() {
        let entry = ActiveAlert::raise(Alert::new("Bangalore", "Fire"));
        let json = serde_json::to_value(AlertNotice::from(&entry)).unwrap();

        for key in ["id", "location", "disaster_type", "message", "map_url", "raised_at"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
