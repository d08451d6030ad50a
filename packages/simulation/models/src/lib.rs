#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Improvement archetypes, effect profiles and simulation result types.
//!
//! Each archetype carries a fixed effect profile: how many percentage
//! points of severity it removes from air pollution, heat island and
//! green-space records. The keyword table that selects an archetype lives
//! in the simulation engine.

use ecomind_vulnerability_models::VulnerabilityRecord;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity reductions applied by an archetype, in percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectProfile {
    /// Subtracted from `Air Pollution` severities.
    pub air_quality_improvement_pct: u8,
    /// Subtracted from `Heat Island` severities.
    pub heat_reduction_pct: u8,
    /// Subtracted from `Lack of Green Areas` severities.
    pub green_space_increase_pct: u8,
}

impl EffectProfile {
    /// Creates a profile from its three percentages.
    #[must_use]
    pub const fn new(air: u8, heat: u8, green: u8) -> Self {
        Self {
            air_quality_improvement_pct: air,
            heat_reduction_pct: heat,
            green_space_increase_pct: green,
        }
    }
}

/// One of the five improvement kinds the assistant can simulate.
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
pub enum ImprovementArchetype {
    /// More trees, parks and green space
    GreenSpace,
    /// Better public transportation
    PublicTransport,
    /// Fewer vehicles on the road
    TrafficReduction,
    /// Water treatment and pollution control
    WaterTreatment,
    /// Nothing more specific was recognized
    General,
}

impl ImprovementArchetype {
    /// Human-readable description shown to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GreenSpace => "Added green spaces and tree coverage",
            Self::PublicTransport => "Improved public transportation infrastructure",
            Self::TrafficReduction => "Reduced vehicle traffic and emissions",
            Self::WaterTreatment => "Enhanced water treatment and pollution control",
            Self::General => "General environmental improvements",
        }
    }

    /// The fixed effect profile of this archetype.
    #[must_use]
    pub const fn effect(self) -> EffectProfile {
        match self {
            Self::GreenSpace => EffectProfile::new(15, 20, 35),
            Self::PublicTransport => EffectProfile::new(25, 5, 0),
            Self::TrafficReduction => EffectProfile::new(30, 10, 0),
            Self::WaterTreatment => EffectProfile::new(10, 0, 5),
            Self::General => EffectProfile::new(10, 10, 10),
        }
    }

    /// Returns all variants of this enum, in matching priority order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::GreenSpace,
            Self::PublicTransport,
            Self::TrafficReduction,
            Self::WaterTreatment,
            Self::General,
        ]
    }
}

/// Headline numbers of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationMetrics {
    /// Air quality improvement, in percent.
    #[serde(rename = "airQualityImprovement")]
    pub air_quality_delta: u8,
    /// Heat reduction, in percent.
    #[serde(rename = "heatReduction")]
    pub heat_delta: u8,
    /// Green space increase, in percent.
    #[serde(rename = "greenSpaceIncrease")]
    pub green_space_delta: u8,
    /// Overall environmental score (0-100) of the simulated records.
    pub overall_score: u8,
}

impl SimulationMetrics {
    /// Builds metrics from an effect profile and a computed score.
    #[must_use]
    pub const fn from_effect(effect: EffectProfile, overall_score: u8) -> Self {
        Self {
            air_quality_delta: effect.air_quality_improvement_pct,
            heat_delta: effect.heat_reduction_pct,
            green_space_delta: effect.green_space_increase_pct,
            overall_score,
        }
    }
}

/// Outcome of simulating one improvement prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Which archetype the prompt was classified as.
    pub archetype: ImprovementArchetype,
    /// Human-readable label of the archetype.
    #[serde(rename = "improvement")]
    pub improvement_label: String,
    /// Updated snapshot: same records, same order, adjusted severities.
    #[serde(rename = "vulnerabilities")]
    pub resulting_records: Vec<VulnerabilityRecord>,
    /// Derived metrics.
    pub metrics: SimulationMetrics,
}
