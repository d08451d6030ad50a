//! Severity adjustment.
//!
//! Applies an [`EffectProfile`] to every record of a snapshot. Only the
//! `severity` field changes; identity, order and every other field are
//! carried over. Severities only ever decrease and floor at zero.

use ecomind_simulation_models::EffectProfile;
use ecomind_vulnerability_models::{VulnerabilityCategory, VulnerabilityRecord};

/// Raw-prompt keyword that triggers the transport access reduction.
pub const TRANSPORT_KEYWORD: &str = "transport";

/// Flat severity reduction for `Poor Transport Access` records when the
/// prompt mentions [`TRANSPORT_KEYWORD`].
pub const TRANSPORT_ACCESS_REDUCTION: f64 = 0.25;

/// Returns `true` if the (lower-cased) prompt should reduce transport
/// access severities.
///
/// This looks at the raw prompt, not at the classified archetype: a prompt
/// such as "transport-friendly trees" classifies as green space and still
/// reduces transport access severities.
#[must_use]
pub fn mentions_transport(lower_prompt: &str) -> bool {
    lower_prompt.contains(TRANSPORT_KEYWORD)
}

/// Computes the new severity of a single record.
#[must_use]
pub fn adjusted_severity(
    record: &VulnerabilityRecord,
    effect: EffectProfile,
    transport_mentioned: bool,
) -> f64 {
    let reduction = match record.category {
        VulnerabilityCategory::AirPollution => pct(effect.air_quality_improvement_pct),
        VulnerabilityCategory::HeatIsland => pct(effect.heat_reduction_pct),
        VulnerabilityCategory::LackOfGreenAreas => pct(effect.green_space_increase_pct),
        VulnerabilityCategory::PoorTransportAccess => {
            if transport_mentioned {
                TRANSPORT_ACCESS_REDUCTION
            } else {
                0.0
            }
        }
        VulnerabilityCategory::WaterPollution
        | VulnerabilityCategory::HealthInfrastructureDeficiency
        | VulnerabilityCategory::EducationDeficiency => return record.severity,
    };

    (record.severity - reduction).max(0.0)
}

/// Produces a new snapshot of `records` with `effect` applied.
#[must_use]
pub fn adjust(
    records: &[VulnerabilityRecord],
    effect: EffectProfile,
    transport_mentioned: bool,
) -> Vec<VulnerabilityRecord> {
    records
        .iter()
        .map(|record| VulnerabilityRecord {
            severity: adjusted_severity(record, effect, transport_mentioned),
            ..record.clone()
        })
        .collect()
}

fn pct(value: u8) -> f64 {
    f64::from(value) / 100.0
}
