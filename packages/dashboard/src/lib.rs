#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard state for one selected region.
//!
//! All state the dashboard needs (selected region and categories, the
//! severity threshold, and the currently applied simulation) lives in a
//! [`DashboardView`] value owned by the caller. Queries against it are
//! plain methods; nothing here is global.

pub mod assistant;
pub mod notifications;

use ecomind_dataset::filter::{self, RecordFilter};
use ecomind_dataset::summary::{self, CategorySummary, SeverityComparison};
use ecomind_dataset::{Dataset, DatasetError};
use ecomind_simulation::score;
use ecomind_simulation_models::SimulationResult;
use ecomind_vulnerability_models::{
    InvalidCategoryError, Location, Position, VulnerabilityCategory, VulnerabilityRecord,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from dashboard operations.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Loading or validating data failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// A category name in the query was not recognized.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The assistant was sent a blank prompt.
    #[error("Prompt is empty")]
    EmptyPrompt,

    /// A simulation result does not describe the view's base records.
    #[error("Simulation snapshot does not match the base records")]
    SnapshotMismatch,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The notification feed could not be parsed.
    #[error("Invalid notification feed: {0}")]
    Notifications(#[from] serde_json::Error),
}

impl From<InvalidCategoryError> for DashboardError {
    fn from(e: InvalidCategoryError) -> Self {
        Self::UnknownCategory(e.name)
    }
}

/// Region and categories chosen on the region picker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// Country name.
    pub country: String,
    /// State name.
    pub state: String,
    /// City name.
    pub city: String,
    /// Categories to show initially.
    pub vulnerabilities: Vec<VulnerabilityCategory>,
}

impl DashboardQuery {
    /// Builds a query from raw picker values. `vulnerabilities` is a
    /// comma-separated list of category display names.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnknownCategory`] if any listed name is not
    /// a category.
    pub fn from_parts(
        country: &str,
        state: &str,
        city: &str,
        vulnerabilities: Option<&str>,
    ) -> Result<Self, DashboardError> {
        Ok(Self {
            country: country.trim().to_string(),
            state: state.trim().to_string(),
            city: city.trim().to_string(),
            vulnerabilities: vulnerabilities
                .map(parse_categories)
                .transpose()?
                .unwrap_or_default(),
        })
    }

    /// The selected region.
    #[must_use]
    pub fn location(&self) -> Location {
        Location::new(self.city.as_str(), self.state.as_str(), self.country.as_str())
    }

    /// Returns `true` when a full region and at least one category are
    /// selected, i.e. the picker may proceed to the dashboard.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.country.is_empty()
            && !self.state.is_empty()
            && !self.city.is_empty()
            && !self.vulnerabilities.is_empty()
    }
}

/// Parses a comma-separated list of category display names, ignoring empty
/// entries and duplicates.
///
/// # Errors
///
/// Returns [`DashboardError::UnknownCategory`] for the first unrecognized
/// name.
pub fn parse_categories(s: &str) -> Result<Vec<VulnerabilityCategory>, DashboardError> {
    let mut out = Vec::new();
    for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let category = VulnerabilityCategory::from_name(name)?;
        if !out.contains(&category) {
            out.push(category);
        }
    }
    Ok(out)
}

/// State of the dashboard for a single region.
#[derive(Debug, Clone)]
pub struct DashboardView {
    location: Location,
    initial_categories: Vec<VulnerabilityCategory>,
    filter: RecordFilter,
    base_records: Vec<VulnerabilityRecord>,
    simulation: Option<SimulationResult>,
}

impl DashboardView {
    /// Opens the dashboard for the query's region. The base records are the
    /// dataset records in exactly that region.
    #[must_use]
    pub fn new(dataset: &Dataset, query: &DashboardQuery) -> Self {
        let location = query.location();
        let base_records = dataset.for_location(&location);

        log::debug!("Opened dashboard for {location} with {} records", base_records.len());

        Self {
            location,
            initial_categories: query.vulnerabilities.clone(),
            filter: RecordFilter::new(query.vulnerabilities.clone(), 0.0),
            base_records,
            simulation: None,
        }
    }

    /// The region being shown.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Unsimulated records for the region.
    #[must_use]
    pub fn base_records(&self) -> &[VulnerabilityRecord] {
        &self.base_records
    }

    /// Records currently shown: the applied simulation's snapshot, or the
    /// base records if none is applied.
    #[must_use]
    pub fn displayed_records(&self) -> &[VulnerabilityRecord] {
        self.simulation
            .as_ref()
            .map_or(&self.base_records, |s| &s.resulting_records)
    }

    /// Displayed records that pass the category and severity filters.
    #[must_use]
    pub fn visible_records(&self) -> Vec<VulnerabilityRecord> {
        self.filter.apply(self.displayed_records())
    }

    /// Centre of the visible records.
    #[must_use]
    pub fn map_center(&self) -> Position {
        filter::map_center(&self.visible_records())
    }

    /// Currently selected categories. Empty means all.
    #[must_use]
    pub fn selected_categories(&self) -> &[VulnerabilityCategory] {
        &self.filter.categories
    }

    /// Adds `category` to the selection, or removes it if already selected.
    pub fn toggle_category(&mut self, category: VulnerabilityCategory) {
        if let Some(idx) = self.filter.categories.iter().position(|c| *c == category) {
            self.filter.categories.remove(idx);
        } else {
            self.filter.categories.push(category);
        }
    }

    /// Minimum severity shown.
    #[must_use]
    pub const fn severity_threshold(&self) -> f64 {
        self.filter.severity_threshold
    }

    /// Sets the minimum severity shown, clamped to `[0, 1]`. Non-finite
    /// values reset the threshold to 0.
    pub fn set_severity_threshold(&mut self, threshold: f64) {
        self.filter.severity_threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Runs a simulation against the base records. Does not apply it.
    #[must_use]
    pub fn simulate(&self, prompt: &str) -> SimulationResult {
        ecomind_simulation::simulate(prompt, &self.base_records)
    }

    /// Replaces the displayed records with a simulation's snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::SnapshotMismatch`] if the result's records
    /// are not the base records (same IDs in the same order).
    pub fn apply_simulation(&mut self, result: SimulationResult) -> Result<(), DashboardError> {
        let same_records = result.resulting_records.len() == self.base_records.len()
            && result
                .resulting_records
                .iter()
                .zip(&self.base_records)
                .all(|(a, b)| a.id == b.id);

        if !same_records {
            return Err(DashboardError::SnapshotMismatch);
        }

        log::info!(
            "Applied simulation \"{}\" to {}",
            result.improvement_label,
            self.location
        );
        self.simulation = Some(result);
        Ok(())
    }

    /// The applied simulation, if any.
    #[must_use]
    pub const fn simulation(&self) -> Option<&SimulationResult> {
        self.simulation.as_ref()
    }

    /// Returns `true` if a simulation is applied.
    #[must_use]
    pub const fn is_simulated(&self) -> bool {
        self.simulation.is_some()
    }

    /// Restores the initial category selection, a zero threshold, and the
    /// unsimulated records.
    pub fn reset(&mut self) {
        self.filter = RecordFilter::new(self.initial_categories.clone(), 0.0);
        self.simulation = None;
    }

    /// Overall environmental score of the base records.
    #[must_use]
    pub fn baseline_score(&self) -> u8 {
        score::overall_score(&self.base_records)
    }

    /// People affected across all base records.
    #[must_use]
    pub fn population_affected(&self) -> u64 {
        summary::total_population(&self.base_records)
    }

    /// Per-category summary of the base records.
    #[must_use]
    pub fn summary(&self) -> Vec<CategorySummary> {
        summary::summarize(&self.base_records)
    }

    /// Baseline vs simulated mean severities, if a simulation is applied.
    #[must_use]
    pub fn comparison(&self) -> Option<Vec<SeverityComparison>> {
        self.simulation
            .as_ref()
            .map(|s| summary::compare(&self.base_records, &s.resulting_records))
    }
}
