//! Per-category aggregates for the dashboard charts.

use std::collections::BTreeMap;

use ecomind_vulnerability_models::{VulnerabilityCategory, VulnerabilityRecord};
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// The category these numbers describe.
    pub category: VulnerabilityCategory,
    /// Number of records.
    pub count: u64,
    /// Mean severity across the records.
    pub mean_severity: f64,
    /// Sum of affected population.
    pub population_affected: u64,
}

/// Mean severity of one category before and after a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityComparison {
    /// The category being compared.
    pub category: VulnerabilityCategory,
    /// Mean severity in the baseline records.
    pub baseline: f64,
    /// Mean severity in the simulated records.
    pub simulated: f64,
}

impl SeverityComparison {
    /// Reduction in mean severity; positive means the simulation helped.
    #[must_use]
    pub fn improvement(&self) -> f64 {
        self.baseline - self.simulated
    }
}

/// Summarizes `records` per category, in [`VulnerabilityCategory::all`]
/// order. Categories with no records are omitted.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(records: &[VulnerabilityRecord]) -> Vec<CategorySummary> {
    let mut totals: BTreeMap<VulnerabilityCategory, (u64, f64, u64)> = BTreeMap::new();

    for record in records {
        let entry = totals.entry(record.category).or_insert((0, 0.0, 0));
        entry.0 += 1;
        entry.1 += record.severity;
        entry.2 += record.population_affected;
    }

    totals
        .into_iter()
        .map(|(category, (count, severity_sum, population))| CategorySummary {
            category,
            count,
            mean_severity: severity_sum / count as f64,
            population_affected: population,
        })
        .collect()
}

/// Pairs the per-category mean severities of two snapshots of the same
/// records. Categories missing from either side are omitted.
#[must_use]
pub fn compare(
    baseline: &[VulnerabilityRecord],
    simulated: &[VulnerabilityRecord],
) -> Vec<SeverityComparison> {
    let after: BTreeMap<VulnerabilityCategory, f64> = summarize(simulated)
        .into_iter()
        .map(|s| (s.category, s.mean_severity))
        .collect();

    summarize(baseline)
        .into_iter()
        .filter_map(|before| {
            after.get(&before.category).map(|&simulated| SeverityComparison {
                category: before.category,
                baseline: before.mean_severity,
                simulated,
            })
        })
        .collect()
}

/// Total affected population across `records`.
#[must_use]
pub fn total_population(records: &[VulnerabilityRecord]) -> u64 {
    records.iter().map(|r| r.population_affected).sum()
}

#[cfg(test)]
mod tests {
    use ecomind_vulnerability_models::{Location, Position};

    use super::*;

    fn record(
        id: u32,
        category: VulnerabilityCategory,
        severity: f64,
        population: u64,
    ) -> VulnerabilityRecord {
        VulnerabilityRecord {
            id,
            location: Location::new("A", "S", "C"),
            category,
            position: Position {
                latitude: 0.0,
                longitude: 0.0,
            },
            severity,
            population_affected: population,
            description: String::new(),
        }
    }

    #[test]
    fn summarizes_in_category_order() {
        let records = vec![
            record(1, VulnerabilityCategory::HeatIsland, 0.4, 10),
            record(2, VulnerabilityCategory::AirPollution, 0.8, 20),
            record(3, VulnerabilityCategory::HeatIsland, 0.6, 30),
        ];
        let summary = summarize(&records);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].category, VulnerabilityCategory::AirPollution);
        assert_eq!(summary[1].category, VulnerabilityCategory::HeatIsland);
        assert_eq!(summary[1].count, 2);
        assert!((summary[1].mean_severity - 0.5).abs() < 1e-9);
        assert_eq!(summary[1].population_affected, 40);
        assert_eq!(total_population(&records), 60);
    }

    #[test]
    fn summarize_empty_is_empty() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn compare_reports_improvement() {
        let baseline = vec![record(1, VulnerabilityCategory::AirPollution, 0.8, 1)];
        let simulated = vec![record(1, VulnerabilityCategory::AirPollution, 0.5, 1)];
        let comparison = compare(&baseline, &simulated);

        assert_eq!(comparison.len(), 1);
        assert!((comparison[0].improvement() - 0.3).abs() < 1e-9);
    }
}
