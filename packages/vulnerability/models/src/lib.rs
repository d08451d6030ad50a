#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Environmental vulnerability taxonomy and record types.
//!
//! This crate defines the closed set of vulnerability categories, the
//! record shape shared by the dataset loader, the simulation engine and the
//! dashboard, and the display bands used to colour map markers.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Kind of environmental or infrastructure vulnerability affecting an area.
///
/// Serializes using the human-readable names the dashboard fixtures use
/// (e.g. `"Air Pollution"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum VulnerabilityCategory {
    /// Poor outdoor air quality.
    #[serde(rename = "Air Pollution")]
    #[strum(serialize = "Air Pollution")]
    AirPollution,
    /// Contaminated surface or drinking water.
    #[serde(rename = "Water Pollution")]
    #[strum(serialize = "Water Pollution")]
    WaterPollution,
    /// Urban areas significantly hotter than their surroundings.
    #[serde(rename = "Heat Island")]
    #[strum(serialize = "Heat Island")]
    HeatIsland,
    /// Insufficient parks, tree cover or other green space.
    #[serde(rename = "Lack of Green Areas")]
    #[strum(serialize = "Lack of Green Areas")]
    LackOfGreenAreas,
    /// Limited access to public transportation.
    #[serde(rename = "Poor Transport Access")]
    #[strum(serialize = "Poor Transport Access")]
    PoorTransportAccess,
    /// Too few clinics, hospitals or health services.
    #[serde(rename = "Health Infrastructure Deficiency")]
    #[strum(serialize = "Health Infrastructure Deficiency")]
    HealthInfrastructureDeficiency,
    /// Too few schools or educational services.
    #[serde(rename = "Education Deficiency")]
    #[strum(serialize = "Education Deficiency")]
    EducationDeficiency,
}

impl VulnerabilityCategory {
    /// Returns all variants of this enum, in legend order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::AirPollution,
            Self::WaterPollution,
            Self::HeatIsland,
            Self::LackOfGreenAreas,
            Self::PoorTransportAccess,
            Self::HealthInfrastructureDeficiency,
            Self::EducationDeficiency,
        ]
    }

    /// Marker colour used for this category in charts and the filter list.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::AirPollution => "#E74C3C",
            Self::WaterPollution => "#3498DB",
            Self::HeatIsland => "#E67E22",
            Self::LackOfGreenAreas => "#2ECC71",
            Self::PoorTransportAccess => "#9B59B6",
            Self::HealthInfrastructureDeficiency => "#E91E63",
            Self::EducationDeficiency => "#F1C40F",
        }
    }

    /// Parses a category from its display name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCategoryError`] if `name` is not one of the seven
    /// display names.
    pub fn from_name(name: &str) -> Result<Self, InvalidCategoryError> {
        name.trim()
            .parse()
            .map_err(|_| InvalidCategoryError { name: name.to_string() })
    }
}

/// Error returned when a string does not name a [`VulnerabilityCategory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCategoryError {
    /// The unrecognized category name.
    pub name: String,
}

impl std::fmt::Display for InvalidCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown vulnerability category '{}'", self.name)
    }
}

impl std::error::Error for InvalidCategoryError {}

/// Display band for a normalized severity value.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityLevel {
    /// Below 0.4
    Low,
    /// 0.4 up to 0.6
    Medium,
    /// 0.6 up to 0.8
    High,
    /// 0.8 and above
    Critical,
}

impl SeverityLevel {
    /// Classifies a severity value into its display band.
    #[must_use]
    pub fn from_severity(severity: f64) -> Self {
        if severity >= 0.8 {
            Self::Critical
        } else if severity >= 0.6 {
            Self::High
        } else if severity >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Marker colour for this band.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Critical => "#E74C3C",
            Self::High => "#E67E22",
            Self::Medium => "#F1C40F",
            Self::Low => "#2ECC71",
        }
    }

    /// Legend label including the band's range.
    #[must_use]
    pub const fn legend_label(self) -> &'static str {
        match self {
            Self::Critical => "Critical (0.8 - 1.0)",
            Self::High => "High (0.6 - 0.8)",
            Self::Medium => "Medium (0.4 - 0.6)",
            Self::Low => "Low (0 - 0.4)",
        }
    }

    /// Returns all bands from most to least severe.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }
}

/// Error returned when a severity lies outside `[0, 1]` or is not finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidSeverityError {
    /// The rejected severity value.
    pub value: f64,
}

impl std::fmt::Display for InvalidSeverityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid severity value {}: expected 0.0-1.0", self.value)
    }
}

impl std::error::Error for InvalidSeverityError {}

/// Checks that a severity is a finite value in `[0, 1]`.
///
/// # Errors
///
/// Returns [`InvalidSeverityError`] for NaN, infinities and out-of-range
/// values.
pub fn validate_severity(value: f64) -> Result<f64, InvalidSeverityError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(InvalidSeverityError { value })
    }
}

/// Region an area belongs to. All three parts are exact-match keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// City name.
    pub city: String,
    /// State or province name.
    pub state: String,
    /// Country name.
    pub country: String,
}

impl Location {
    /// Creates a location from its three parts.
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            country: country.into(),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.city, self.state, self.country)
    }
}

/// WGS84 point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Position {
    /// Returns `true` if both coordinates are finite and within WGS84 bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A single vulnerability observed at a point inside a city.
///
/// Serializes flat, matching the dashboard fixture JSON:
/// `{ id, city, state, country, type, latitude, longitude, severity,
/// population_affected, description }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityRecord {
    /// Identifier, unique within a dataset.
    pub id: u32,
    /// Region the record belongs to.
    #[serde(flatten)]
    pub location: Location,
    /// Vulnerability kind.
    #[serde(rename = "type")]
    pub category: VulnerabilityCategory,
    /// Where the vulnerability is located.
    #[serde(flatten)]
    pub position: Position,
    /// Normalized severity in `[0, 1]`, higher is worse.
    pub severity: f64,
    /// Number of residents affected.
    pub population_affected: u64,
    /// Free-text description for display.
    pub description: String,
}

impl VulnerabilityRecord {
    /// Display band of this record's current severity.
    #[must_use]
    pub fn severity_level(&self) -> SeverityLevel {
        SeverityLevel::from_severity(self.severity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip() {
        for category in VulnerabilityCategory::all() {
            let name = category.to_string();
            assert_eq!(VulnerabilityCategory::from_name(&name), Ok(*category));
            assert_eq!(category.as_ref(), name);
        }
        assert_eq!(
            VulnerabilityCategory::LackOfGreenAreas.to_string(),
            "Lack of Green Areas"
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = VulnerabilityCategory::from_name("Noise").unwrap_err();
        assert_eq!(err.name, "Noise");
        assert!(VulnerabilityCategory::from_name("air pollution").is_err());
    }

    #[test]
    fn severity_bands() {
        assert_eq!(SeverityLevel::from_severity(1.0), SeverityLevel::Critical);
        assert_eq!(SeverityLevel::from_severity(0.8), SeverityLevel::Critical);
        assert_eq!(SeverityLevel::from_severity(0.79), SeverityLevel::High);
        assert_eq!(SeverityLevel::from_severity(0.6), SeverityLevel::High);
        assert_eq!(SeverityLevel::from_severity(0.4), SeverityLevel::Medium);
        assert_eq!(SeverityLevel::from_severity(0.39), SeverityLevel::Low);
        assert_eq!(SeverityLevel::from_severity(0.0), SeverityLevel::Low);
    }

    #[test]
    fn validate_severity_range() {
        assert!(validate_severity(0.0).is_ok());
        assert!(validate_severity(1.0).is_ok());
        assert!(validate_severity(-0.01).is_err());
        assert!(validate_severity(1.01).is_err());
        assert!(validate_severity(f64::NAN).is_err());
    }

    #[test]
    fn record_serializes_flat() {
        let json = r#"{
            "id": 7,
            "city": "Los Angeles",
            "state": "California",
            "country": "United States",
            "type": "Heat Island",
            "latitude": 34.05,
            "longitude": -118.24,
            "severity": 0.72,
            "population_affected": 120000,
            "description": "Dense asphalt coverage"
        }"#;
        let record: VulnerabilityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.category, VulnerabilityCategory::HeatIsland);
        assert_eq!(record.location.city, "Los Angeles");
        assert!((record.position.longitude + 118.24).abs() < 1e-9);
        assert_eq!(record.severity_level(), SeverityLevel::High);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "Heat Island");
        assert_eq!(value["country"], "United States");
        assert_eq!(value["population_affected"], 120_000);
    }
}
