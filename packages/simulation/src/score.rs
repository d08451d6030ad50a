//! Overall environmental score.

use ecomind_vulnerability_models::VulnerabilityRecord;

/// Score reported for a snapshot with no records.
pub const EMPTY_SCORE: u8 = 100;

/// Mean severity of `records`, or `None` if there are none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_severity(records: &[VulnerabilityRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: f64 = records.iter().map(|r| r.severity).sum();
    Some(sum / records.len() as f64)
}

/// Computes `round(100 - mean(severity) * 100)`, in `[0, 100]`.
///
/// Rounds half away from zero ([`f64::round`]). The product is rounded to
/// `f64` before the subtraction, so ties such as a mean of `0.675` land on
/// `32.5` and score 33. An empty snapshot has no contributing severities
/// and scores [`EMPTY_SCORE`].
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
pub fn overall_score(records: &[VulnerabilityRecord]) -> u8 {
    let Some(mean) = mean_severity(records) else {
        return EMPTY_SCORE;
    };
    let score = (100.0 - mean * 100.0).round();
    score.clamp(0.0, 100.0) as u8
}
