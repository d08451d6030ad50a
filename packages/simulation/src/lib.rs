#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Improvement simulation and environmental scoring engine.
//!
//! [`simulate`] classifies a free-text improvement prompt into one of the
//! fixed [`ImprovementArchetype`]s, applies its effect profile to a
//! snapshot of vulnerability records and scores the result. It is a pure
//! function: the input records are never modified, so every simulation
//! starts from the same baseline and simulations never stack.

pub mod adjust;
pub mod classify;
pub mod reply;
pub mod score;

use ecomind_simulation_models::{SimulationMetrics, SimulationResult};
use ecomind_vulnerability_models::VulnerabilityRecord;

pub use ecomind_simulation_models::{EffectProfile, ImprovementArchetype};

/// Simulates the improvement described by `prompt` on `records`.
///
/// The returned snapshot has the same length, order and record identities
/// as `records`; only severities may differ.
#[must_use]
pub fn simulate(prompt: &str, records: &[VulnerabilityRecord]) -> SimulationResult {
    let lower = prompt.to_lowercase();
    let archetype = classify::classify_lowercase(&lower);
    let effect = archetype.effect();
    let transport_mentioned = adjust::mentions_transport(&lower);

    log::debug!(
        "Classified prompt as {archetype} (transport keyword: {transport_mentioned}) over {} records",
        records.len()
    );

    let resulting_records = adjust::adjust(records, effect, transport_mentioned);
    let overall_score = score::overall_score(&resulting_records);

    SimulationResult {
        archetype,
        improvement_label: archetype.label().to_string(),
        resulting_records,
        metrics: SimulationMetrics::from_effect(effect, overall_score),
    }
}

#[cfg(test)]
mod tests {
    use ecomind_vulnerability_models::{Location, Position, VulnerabilityCategory};

    use super::*;

    fn record(id: u32, category: VulnerabilityCategory, severity: f64) -> VulnerabilityRecord {
        VulnerabilityRecord {
            id,
            location: Location::new("Springfield", "Illinois", "United States"),
            category,
            position: Position {
                latitude: 39.78,
                longitude: -89.65,
            },
            severity,
            population_affected: 5_000,
            description: String::new(),
        }
    }

    fn all_categories(severity: f64) -> Vec<VulnerabilityRecord> {
        VulnerabilityCategory::all()
            .iter()
            .zip(1..)
            .map(|(&category, id)| record(id, category, severity))
            .collect()
    }

    #[test]
    fn end_to_end_traffic_example() {
        let records = vec![
            record(1, VulnerabilityCategory::AirPollution, 0.8),
            record(2, VulnerabilityCategory::HeatIsland, 0.6),
        ];
        let result = simulate("reduce traffic downtown", &records);

        assert_eq!(result.archetype, ImprovementArchetype::TrafficReduction);
        assert_eq!(result.improvement_label, "Reduced vehicle traffic and emissions");
        assert!((result.resulting_records[0].severity - 0.5).abs() < 1e-9);
        assert!((result.resulting_records[1].severity - 0.5).abs() < 1e-9);
        assert_eq!(result.metrics.air_quality_delta, 30);
        assert_eq!(result.metrics.heat_delta, 10);
        assert_eq!(result.metrics.green_space_delta, 0);
        assert_eq!(result.metrics.overall_score, 50);
    }

    #[test]
    fn fallback_example() {
        let records = vec![record(1, VulnerabilityCategory::LackOfGreenAreas, 0.5)];
        let result = simulate("make things nicer", &records);

        assert_eq!(result.archetype, ImprovementArchetype::General);
        assert_eq!(result.improvement_label, "General environmental improvements");
        assert!((result.resulting_records[0].severity - 0.4).abs() < 1e-9);
        assert_eq!(result.metrics.overall_score, 60);
    }

    #[test]
    fn preserves_identity_and_cardinality() {
        let records: Vec<VulnerabilityRecord> = all_categories(0.7)
            .into_iter()
            .rev()
            .collect();
        for prompt in ["", "trees", "bus", "cars", "water", "transport", "anything"] {
            let result = simulate(prompt, &records);
            assert_eq!(result.resulting_records.len(), records.len());
            for (before, after) in records.iter().zip(&result.resulting_records) {
                assert_eq!(before.id, after.id, "prompt {prompt:?} reordered records");
            }
        }
    }

    #[test]
    fn severities_stay_in_unit_interval() {
        let prompts = [
            "plant trees",
            "public transport",
            "fewer vehicles",
            "water pollution",
            "",
            "transport-friendly parks",
        ];
        for &start in &[0.0, 0.05, 0.1, 0.25, 0.5, 0.99, 1.0] {
            let records = all_categories(start);
            for prompt in prompts {
                for r in simulate(prompt, &records).resulting_records {
                    assert!(
                        (0.0..=1.0).contains(&r.severity),
                        "prompt {prompt:?} from {start} produced {} for {}",
                        r.severity,
                        r.category
                    );
                }
            }
        }
    }

    #[test]
    fn small_severity_floors_at_exactly_zero() {
        let records = vec![record(1, VulnerabilityCategory::AirPollution, 0.05)];
        let result = simulate("ban cars", &records);
        assert!(result.resulting_records[0].severity.abs() < f64::EPSILON);
    }

    #[test]
    fn simulations_do_not_stack() {
        let base = vec![
            record(1, VulnerabilityCategory::AirPollution, 0.8),
            record(2, VulnerabilityCategory::HeatIsland, 0.6),
        ];
        let snapshot = base.clone();

        let _trees = simulate("add trees", &base);
        let traffic = simulate("reduce traffic", &base);

        assert_eq!(base, snapshot, "simulate mutated its input");
        assert!((traffic.resulting_records[0].severity - 0.5).abs() < 1e-9);
        assert!((traffic.resulting_records[1].severity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn transport_side_channel_applies_to_green_prompts() {
        let records = vec![record(1, VulnerabilityCategory::PoorTransportAccess, 0.6)];

        let result = simulate("add transport-friendly trees", &records);
        assert_eq!(result.archetype, ImprovementArchetype::GreenSpace);
        assert!((result.resulting_records[0].severity - 0.35).abs() < 1e-9);

        let result = simulate("add more trees", &records);
        assert!((result.resulting_records[0].severity - 0.6).abs() < f64::EPSILON);

        // "transit" selects the transport archetype but not the side channel
        let result = simulate("more transit", &records);
        assert_eq!(result.archetype, ImprovementArchetype::PublicTransport);
        assert!((result.resulting_records[0].severity - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn larger_effects_never_lower_the_score() {
        let records = vec![
            record(1, VulnerabilityCategory::AirPollution, 0.9),
            record(2, VulnerabilityCategory::HeatIsland, 0.7),
            record(3, VulnerabilityCategory::LackOfGreenAreas, 0.3),
            record(4, VulnerabilityCategory::WaterPollution, 0.6),
        ];
        let weak = EffectProfile::new(10, 10, 10);
        let strong = EffectProfile::new(15, 20, 35);

        let weak_score = score::overall_score(&adjust::adjust(&records, weak, false));
        let strong_score = score::overall_score(&adjust::adjust(&records, strong, false));
        assert!(strong_score >= weak_score);

        for pct in 0..100u8 {
            let next = pct + 1;
            let lower = score::overall_score(&adjust::adjust(
                &records,
                EffectProfile::new(pct, pct, pct),
                false,
            ));
            let higher = score::overall_score(&adjust::adjust(
                &records,
                EffectProfile::new(next, next, next),
                false,
            ));
            assert!(higher >= lower, "score dropped going from {pct}% to {next}%");
        }
    }

    #[test]
    fn empty_dataset_scores_one_hundred() {
        let result = simulate("plant trees", &[]);
        assert!(result.resulting_records.is_empty());
        assert_eq!(result.metrics.overall_score, score::EMPTY_SCORE);
    }

    #[test]
    fn result_serializes_with_dashboard_names() {
        let records = vec![record(1, VulnerabilityCategory::AirPollution, 0.8)];
        let value = serde_json::to_value(simulate("bus", &records)).unwrap();

        assert_eq!(value["improvement"], "Improved public transportation infrastructure");
        assert_eq!(value["archetype"], "PUBLIC_TRANSPORT");
        assert_eq!(value["vulnerabilities"][0]["type"], "Air Pollution");
        assert_eq!(value["metrics"]["airQualityImprovement"], 25);
    }
}
