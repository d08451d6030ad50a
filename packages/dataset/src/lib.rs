#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Vulnerability dataset loading, validation and read-only queries.
//!
//! The dataset is loaded once (from the fixtures embedded at compile time,
//! or from a JSON file on disk) and then treated as immutable ground truth.
//! Everything downstream (filters, summaries, simulations) borrows the
//! records and produces new values instead of mutating them.

pub mod catalog;
pub mod filter;
pub mod fixtures;
pub mod summary;

use std::collections::BTreeSet;
use std::path::Path;

use ecomind_vulnerability_models::{Location, VulnerabilityRecord, validate_severity};
use thiserror::Error;

/// Errors that can occur while loading a dataset or catalog.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Reading a file from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The records file is not valid JSON for the record shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The location catalog is not valid TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A record's severity is outside `[0, 1]` or not finite.
    #[error("Record {id}: severity {severity} is outside 0.0-1.0")]
    InvalidSeverity {
        /// Offending record ID.
        id: u32,
        /// The rejected value.
        severity: f64,
    },

    /// A record's coordinates are not a valid WGS84 point.
    #[error("Record {id}: invalid coordinates")]
    InvalidPosition {
        /// Offending record ID.
        id: u32,
    },

    /// Two records share the same ID.
    #[error("Duplicate record id {id}")]
    DuplicateId {
        /// The repeated ID.
        id: u32,
    },

    /// A location is not present in the catalog.
    #[error("Unknown location: {city}, {state}, {country}")]
    UnknownLocation {
        /// Country name.
        country: String,
        /// State name.
        state: String,
        /// City name.
        city: String,
    },
}

impl DatasetError {
    /// Builds an [`DatasetError::UnknownLocation`] from a [`Location`].
    #[must_use]
    pub fn unknown_location(location: &Location) -> Self {
        Self::UnknownLocation {
            country: location.country.clone(),
            state: location.state.clone(),
            city: location.city.clone(),
        }
    }
}

/// An ordered, validated collection of vulnerability records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    records: Vec<VulnerabilityRecord>,
}

impl Dataset {
    /// Validates and wraps a list of records, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if any record has an out-of-range severity,
    /// invalid coordinates, or a duplicate ID.
    pub fn new(records: Vec<VulnerabilityRecord>) -> Result<Self, DatasetError> {
        let mut seen = BTreeSet::new();

        for record in &records {
            validate_severity(record.severity).map_err(|e| DatasetError::InvalidSeverity {
                id: record.id,
                severity: e.value,
            })?;
            if !record.position.is_valid() {
                return Err(DatasetError::InvalidPosition { id: record.id });
            }
            if !seen.insert(record.id) {
                return Err(DatasetError::DuplicateId { id: record.id });
            }
        }

        Ok(Self { records })
    }

    /// Parses and validates records from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Json`] on malformed input, or a validation
    /// error from [`Dataset::new`].
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<VulnerabilityRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Reads and validates records from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be read, or any
    /// error from [`Dataset::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        log::info!("Loading vulnerability dataset from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&json)?;
        log::info!("Loaded {} records", dataset.len());
        Ok(dataset)
    }

    /// Returns the dataset bundled with the binary.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the embedded fixture fails validation.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json_str(fixtures::VULNERABILITIES_JSON)
    }

    /// All records in load order.
    #[must_use]
    pub fn records(&self) -> &[VulnerabilityRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Base records for a region, in load order.
    #[must_use]
    pub fn for_location(&self, location: &Location) -> Vec<VulnerabilityRecord> {
        filter::by_location(&self.records, location)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_RECORDS: &str = r#"[
        {"id": 1, "city": "A", "state": "S", "country": "C", "type": "Air Pollution",
         "latitude": 1.0, "longitude": 2.0, "severity": 0.5, "population_affected": 10,
         "description": "x"},
        {"id": 2, "city": "B", "state": "S", "country": "C", "type": "Heat Island",
         "latitude": 1.0, "longitude": 2.0, "severity": 0.2, "population_affected": 5,
         "description": "y"}
    ]"#;

    #[test]
    fn embedded_dataset_is_valid() {
        let dataset = Dataset::embedded().unwrap();
        assert!(!dataset.is_empty());
        for record in dataset.records() {
            assert!(
                (0.0..=1.0).contains(&record.severity),
                "record {} severity {} out of range",
                record.id,
                record.severity
            );
        }
    }

    #[test]
    fn preserves_load_order() {
        let dataset = Dataset::from_json_str(TWO_RECORDS).unwrap();
        let ids: Vec<u32> = dataset.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(dataset.records()[1].location.city, "B");
    }

    #[test]
    fn rejects_out_of_range_severity() {
        let json = TWO_RECORDS.replace("0.5", "1.5");
        let err = Dataset::from_json_str(&json).unwrap_err();
        assert!(
            matches!(err, DatasetError::InvalidSeverity { id: 1, .. }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = TWO_RECORDS.replace("\"id\": 2", "\"id\": 1");
        let err = Dataset::from_json_str(&json).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId { id: 1 }));
    }

    #[test]
    fn rejects_invalid_coordinates() {
        let json = TWO_RECORDS.replacen("\"latitude\": 1.0", "\"latitude\": 91.0", 1);
        let err = Dataset::from_json_str(&json).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidPosition { id: 1 }));
    }

    #[test]
    fn rejects_unknown_category() {
        let json = TWO_RECORDS.replace("Heat Island", "Noise");
        assert!(matches!(
            Dataset::from_json_str(&json),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn for_location_matches_exactly() {
        let dataset = Dataset::from_json_str(TWO_RECORDS).unwrap();
        let base = dataset.for_location(&Location::new("B", "S", "C"));
        assert_eq!(base.len(), 1);
        assert_eq!(base[0].id, 2);
        assert!(dataset.for_location(&Location::new("b", "S", "C")).is_empty());
    }
}
