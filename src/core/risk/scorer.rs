// Weighted multi-factor risk fusion.

use std::collections::BTreeMap;

use crate::core::model::{RiskFactor, RiskFactors};
use crate::core::tiers::RiskCategory;

/// Weighted contribution of one factor, in score points.
///
/// The reading is normalized against the factor's saturation point onto a
/// 0-100 sub-scale (clamped at both ends, NaN counts as zero) before weighting.
fn weighted_term(factors: &RiskFactors, factor: RiskFactor) -> f64 {
    let normalized = (factors.value(factor) / factor.saturation_point() * 100.0)
        .max(0.0)
        .min(100.0);
    normalized * factor.weight()
}

/// Composite landslide risk score in [0, 100].
///
/// A relative ranking aid, not a probability.
pub fn compute_risk_score(factors: &RiskFactors) -> f64 {
    RiskFactor::ALL
        .iter()
        .map(|factor| weighted_term(factors, *factor))
        .sum::<f64>()
        .clamp(0.0, 100.0)
}

/// Per-factor contribution to the score, for explainability.
///
/// Values sum to `compute_risk_score` up to floating point rounding.
pub fn calculate_risk_contributions(factors: &RiskFactors) -> BTreeMap<RiskFactor, f64> {
    RiskFactor::ALL
        .iter()
        .map(|factor| (*factor, weighted_term(factors, *factor)))
        .collect()
}

/// Category and display color for a score.
pub fn get_risk_category(score: f64) -> (RiskCategory, &'static str) {
    let category = RiskCategory::from_score(score);
    (category, category.color())
}
