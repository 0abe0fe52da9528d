//! Enumerated locations and disaster types.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CatalogError;

/// Locations offered when no catalog is configured.
pub const DEFAULT_LOCATIONS: &[&str] = &[
    "Bangalore",
    "JP Nagar",
    "Jayanagar",
    "WhiteField",
    "Rajindranagar",
];

/// Disaster types offered when no catalog is configured.
pub const DEFAULT_DISASTER_TYPES: &[&str] = &[
    "Earthquake",
    "Flood",
    "Cyclone",
    "Landslide",
    "Tsunami",
    "Heat Wave",
    "Fire",
    "Drought",
    "Thunderstorm",
    "Forest Fire",
];

/// Normalize a user-supplied option for catalog lookup.
///
/// Trims, lowercases ASCII and collapses runs of whitespace.
pub fn normalize_option(raw: &str) -> String {
    raw.split_whitespace()
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The fixed option lists alerts are validated against.
///
/// Both lists are non-empty and keep their configured order, which is also
/// the presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    locations: Vec<String>,
    disaster_types: Vec<String>,
}

impl Catalog {
    /// Build a catalog from the given option lists.
    ///
    /// Entries are trimmed; blank entries are dropped.
    pub fn new<L, D>(locations: L, disaster_types: D) -> Result<Self, CatalogError>
    where
        L: IntoIterator,
        L::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let locations = clean_list("location", locations)?;
        let disaster_types = clean_list("disaster type", disaster_types)?;

        Ok(Self {
            locations,
            disaster_types,
        })
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn disaster_types(&self) -> &[String] {
        &self.disaster_types
    }

    pub fn default_location(&self) -> &str {
        &self.locations[0]
    }

    pub fn default_disaster_type(&self) -> &str {
        &self.disaster_types[0]
    }

    /// Find the canonical catalog spelling of a location.
    pub fn resolve_location(&self, raw: &str) -> Option<&str> {
        resolve(&self.locations, raw)
    }

    /// Find the canonical catalog spelling of a disaster type.
    pub fn resolve_disaster_type(&self, raw: &str) -> Option<&str> {
        resolve(&self.disaster_types, raw)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            locations: DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            disaster_types: DEFAULT_DISASTER_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn clean_list<I>(list: &'static str, values: I) -> Result<Vec<String>, CatalogError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();

    for value in values {
        let value: String = value.into();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        if !seen.insert(normalize_option(value)) {
            return Err(CatalogError::Duplicate {
                list,
                value: value.to_string(),
            });
        }
        cleaned.push(value.to_string());
    }

    if cleaned.is_empty() {
        return Err(CatalogError::Empty(list));
    }

    Ok(cleaned)
}

fn resolve<'a>(options: &'a [String], raw: &str) -> Option<&'a str> {
    let wanted = normalize_option(raw);
    if wanted.is_empty() {
        return None;
    }
    options
        .iter()
        .find(|option| normalize_option(option) == wanted)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.default_location(), "Bangalore");
        assert_eq!(catalog.default_disaster_type(), "Earthquake");
        assert_eq!(catalog.locations().len(), 5);
        assert_eq!(catalog.disaster_types().len(), 10);
    }

    #[test]
    fn test_normalize_option() {
        assert_eq!(normalize_option("  JP   Nagar "), "jp nagar");
        assert_eq!(normalize_option("HEAT\twave"), "heat wave");
        assert_eq!(normalize_option("   "), "");
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let catalog = Catalog::default();
        assert_eq!(catalog.resolve_location("whitefield"), Some("WhiteField"));
        assert_eq!(catalog.resolve_disaster_type(" forest  FIRE "), Some("Forest Fire"));
        assert_eq!(catalog.resolve_location("Mysore"), None);
        assert_eq!(catalog.resolve_location(""), None);
    }

    #[test]
    fn test_new_trims_and_drops_blank_entries() {
        let catalog = Catalog::new([" Pune ", "", "Delhi"], ["Flood"]).unwrap();
        assert_eq!(catalog.locations(), ["Pune", "Delhi"]);
        assert_eq!(catalog.default_location(), "Pune");
    }

    #[test]
    fn test_new_rejects_empty_list() {
        let result = Catalog::new(Vec::<String>::new(), ["Flood"]);
        assert_eq!(result, Err(CatalogError::Empty("location")));

        let result = Catalog::new(["Pune"], ["  "]);
        assert_eq!(result, Err(CatalogError::Empty("disaster type")));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let result = Catalog::new(["Pune", "pune"], ["Flood"]);
        assert!(matches!(
            result,
            Err(CatalogError::Duplicate { list: "location", .. })
        ));
    }
}
