//! The active alerts registry.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::alert::{ActiveAlert, Alert, AlertId};
use crate::catalog::Catalog;
use crate::error::RegistryError;
use crate::notifier::Notifier;

/// The administrator's pending, not yet confirmed choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub location: String,
    pub disaster_type: String,
}

/// Authoritative holder of the active alerts for an admin session.
///
/// Entries are kept in creation order. Every successful
/// [`confirm_alert`](Self::confirm_alert) invokes the notifier exactly once.
pub struct AlertRegistry {
    catalog: Catalog,
    selection: Selection,
    active: Vec<ActiveAlert>,
    notifier: Arc<dyn Notifier>,
}

impl AlertRegistry {
    /// Create a registry with the selection set to the first catalog entries.
    pub fn new(catalog: Catalog, notifier: Arc<dyn Notifier>) -> Self {
        let selection = Selection {
            location: catalog.default_location().to_string(),
            disaster_type: catalog.default_disaster_type().to_string(),
        };

        Self {
            catalog,
            selection,
            active: Vec::new(),
            notifier,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Overwrite the selected location.
    ///
    /// The value is stored as given; it is checked against the catalog when
    /// the alert is confirmed.
    pub fn set_selected_location(&mut self, value: impl Into<String>) {
        self.selection.location = value.into();
        debug!(location = %self.selection.location, "Location selected");
    }

    /// Overwrite the selected disaster type.
    pub fn set_selected_disaster_type(&mut self, value: impl Into<String>) {
        self.selection.disaster_type = value.into();
        debug!(disaster_type = %self.selection.disaster_type, "Disaster type selected");
    }

    /// Raise an alert from the current selection.
    ///
    /// On success the alert is appended to the active list and the notifier
    /// is invoked. On error nothing changes and no notification is sent.
    pub fn confirm_alert(&mut self) -> Result<ActiveAlert, RegistryError> {
        let Selection {
            location,
            disaster_type,
        } = &self.selection;

        if location.trim().is_empty() || disaster_type.trim().is_empty() {
            debug!("Alert confirmation skipped: incomplete selection");
            return Err(RegistryError::IncompleteSelection);
        }

        let location = self
            .catalog
            .resolve_location(location)
            .ok_or_else(|| RegistryError::UnknownLocation(location.clone()))?;
        let disaster_type = self
            .catalog
            .resolve_disaster_type(disaster_type)
            .ok_or_else(|| RegistryError::UnknownDisasterType(disaster_type.clone()))?;

        let entry = ActiveAlert::raise(Alert::new(location, disaster_type));
        self.active.push(entry.clone());

        info!(
            alert_id = %entry.id,
            location = %entry.alert.location,
            disaster_type = %entry.alert.disaster_type,
            active = self.active.len(),
            "Alert raised"
        );

        self.notifier.notify(&entry);

        Ok(entry)
    }

    /// Remove the first entry structurally equal to `alert`.
    ///
    /// Returns the removed entry, or `None` if no entry matched.
    pub fn revoke_alert(&mut self, alert: &Alert) -> Option<ActiveAlert> {
        let index = self.active.iter().position(|entry| &entry.alert == alert);
        self.remove_at(index)
    }

    /// Remove the entry with the given identifier.
    pub fn revoke(&mut self, id: &AlertId) -> Option<ActiveAlert> {
        let index = self.active.iter().position(|entry| &entry.id == id);
        self.remove_at(index)
    }

    /// Snapshot of the active entries in creation order.
    pub fn list_active(&self) -> Vec<ActiveAlert> {
        self.active.clone()
    }

    /// Snapshot of the active alerts without registry metadata.
    pub fn alerts(&self) -> Vec<Alert> {
        self.active.iter().map(|entry| entry.alert.clone()).collect()
    }

    pub fn get(&self, id: &AlertId) -> Option<&ActiveAlert> {
        self.active.iter().find(|entry| &entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    fn remove_at(&mut self, index: Option<usize>) -> Option<ActiveAlert> {
        match index {
            Some(index) => {
                let removed = self.active.remove(index);
                info!(
                    alert_id = %removed.id,
                    location = %removed.alert.location,
                    disaster_type = %removed.alert.disaster_type,
                    "Alert revoked"
                );
                Some(removed)
            }
            None => {
                debug!("Revoke ignored: no matching alert");
                None
            }
        }
    }
}

impl std::fmt::Debug for AlertRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertRegistry")
            .field("selection", &self.selection)
            .field("active", &self.active.len())
            .field("notifier", &self.notifier.name())
            .finish()
    }
}
