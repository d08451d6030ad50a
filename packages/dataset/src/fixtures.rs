//! Fixtures baked into the binary at compile time via [`include_str!`].
//!
//! Alternative files can be supplied at runtime through
//! [`crate::Dataset::from_path`] and
//! [`crate::catalog::LocationCatalog::from_path`].

/// Vulnerability records, as a JSON array.
pub const VULNERABILITIES_JSON: &str = include_str!("../data/vulnerabilities.json");

/// Region picker catalog, as TOML.
pub const LOCATIONS_TOML: &str = include_str!("../data/locations.toml");
