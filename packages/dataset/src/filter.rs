//! Pure record predicates used by the dashboard views.
//!
//! Location and category/severity filters are independent and commute, so
//! callers may apply them in either order.

use ecomind_vulnerability_models::{Location, Position, VulnerabilityCategory, VulnerabilityRecord};
use serde::{Deserialize, Serialize};

/// Map centre used when no records are visible (New York City).
pub const DEFAULT_CENTER: Position = Position {
    latitude: 40.7128,
    longitude: -74.006,
};

/// Returns `true` if `record` is in exactly `location`.
#[must_use]
pub fn matches_location(record: &VulnerabilityRecord, location: &Location) -> bool {
    record.location.city == location.city
        && record.location.state == location.state
        && record.location.country == location.country
}

/// Iterates over the records located in exactly `location`.
pub fn by_location<'a>(
    records: &'a [VulnerabilityRecord],
    location: &'a Location,
) -> impl Iterator<Item = &'a VulnerabilityRecord> + 'a {
    records.iter().filter(move |r| matches_location(r, location))
}

/// Category and minimum-severity filter from the dashboard sidebar.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFilter {
    /// Categories to show. Empty means all categories.
    pub categories: Vec<VulnerabilityCategory>,
    /// Records below this severity are hidden.
    pub severity_threshold: f64,
}

impl RecordFilter {
    /// Creates a filter from a category selection and threshold.
    #[must_use]
    pub const fn new(categories: Vec<VulnerabilityCategory>, severity_threshold: f64) -> Self {
        Self {
            categories,
            severity_threshold,
        }
    }

    /// Returns `true` if `record` passes both the category and severity
    /// conditions.
    #[must_use]
    pub fn matches(&self, record: &VulnerabilityRecord) -> bool {
        let category_ok = self.categories.is_empty() || self.categories.contains(&record.category);
        category_ok && record.severity >= self.severity_threshold
    }

    /// Returns the matching records, in input order.
    #[must_use]
    pub fn apply(&self, records: &[VulnerabilityRecord]) -> Vec<VulnerabilityRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

/// Mean position of `records`, or [`DEFAULT_CENTER`] if there are none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn map_center(records: &[VulnerabilityRecord]) -> Position {
    if records.is_empty() {
        return DEFAULT_CENTER;
    }

    let n = records.len() as f64;
    let (lat, lng) = records.iter().fold((0.0, 0.0), |(lat, lng), r| {
        (lat + r.position.latitude, lng + r.position.longitude)
    });

    Position {
        latitude: lat / n,
        longitude: lng / n,
    }
}
