//! Country → state → city catalog backing the region picker.

use std::collections::BTreeMap;
use std::path::Path;

use ecomind_vulnerability_models::Location;
use serde::{Deserialize, Serialize};

use crate::{DatasetError, fixtures};

/// Cities grouped by state, grouped by country.
///
/// Parsed from TOML of the form:
///
/// ```toml
/// [countries."United States"]
/// "California" = ["Los Angeles", "San Francisco"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationCatalog {
    countries: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl LocationCatalog {
    /// Parses a catalog from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Toml`] if the TOML is malformed.
    pub fn from_toml_str(s: &str) -> Result<Self, DatasetError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] or [`DatasetError::Toml`].
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        log::info!("Loading location catalog from {}", path.display());
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Returns the catalog bundled with the binary.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Toml`] if the embedded catalog is malformed.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_toml_str(fixtures::LOCATIONS_TOML)
    }

    /// Country names, sorted.
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        self.countries.keys().map(String::as_str).collect()
    }

    /// State names within `country`, sorted. Empty for unknown countries.
    #[must_use]
    pub fn states(&self, country: &str) -> Vec<&str> {
        self.countries
            .get(country)
            .map(|states| states.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// City names within `state`, in catalog order. Empty if either the
    /// country or the state is unknown.
    #[must_use]
    pub fn cities(&self, country: &str, state: &str) -> Vec<&str> {
        self.countries
            .get(country)
            .and_then(|states| states.get(state))
            .map(|cities| cities.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns `true` if the exact `(city, state, country)` triple is listed.
    #[must_use]
    pub fn contains(&self, location: &Location) -> bool {
        self.cities(&location.country, &location.state)
            .contains(&location.city.as_str())
    }

    /// Ensures a location is listed in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UnknownLocation`] if it is not.
    pub fn require(&self, location: &Location) -> Result<(), DatasetError> {
        if self.contains(location) {
            Ok(())
        } else {
            Err(DatasetError::unknown_location(location))
        }
    }
}
