// Risk scoring stage.
//
// Architecture:
// - scorer.rs: weighted score, contribution breakdown, category lookup
// - triggers.rs: threshold triggers and the confidence band built from them

pub mod scorer;
pub mod triggers;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model::{RiskFactor, RiskFactors};
use super::tiers::RiskCategory;
use scorer::{calculate_risk_contributions, compute_risk_score};
use triggers::{calculate_confidence_level, identify_active_triggers, ConfidenceLevel};

/// Everything derived from one set of readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: f64,
    pub category: RiskCategory,
    pub contributions: BTreeMap<RiskFactor, f64>,
    pub confidence: ConfidenceLevel,
    /// ± score points
    pub uncertainty: u8,
    pub confidence_explanation: String,
    pub active_triggers: Vec<String>,
}

/// Run the full risk stage for one reading.
pub fn assess(factors: &RiskFactors) -> RiskAssessment {
    let score = compute_risk_score(factors);
    let band = calculate_confidence_level(factors);
    RiskAssessment {
        score,
        category: RiskCategory::from_score(score),
        contributions: calculate_risk_contributions(factors),
        confidence: band.confidence,
        uncertainty: band.uncertainty,
        confidence_explanation: band.explanation,
        active_triggers: identify_active_triggers(factors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_is_consistent() {
        let factors = RiskFactors::new(290.0, 38.0, 58.0, 18.0, 15.0);
        let assessment = assess(&factors);

        assert_eq!(assessment.category, RiskCategory::from_score(assessment.score));
        let total: f64 = assessment.contributions.values().sum();
        assert!((total - assessment.score).abs() < 1e-9);
        // rainfall and deforestation fire, road cuts sits on the threshold
        assert_eq!(assessment.active_triggers.len(), 2);
        assert_eq!(assessment.confidence, ConfidenceLevel::Medium);
        assert_eq!(assessment.uncertainty, 10);
    }

    #[test]
    fn test_quiet_village() {
        let assessment = assess(&RiskFactors::new(150.0, 28.0, 35.0, 5.0, 3.0));
        assert_eq!(assessment.category, RiskCategory::Low);
        assert!(assessment.active_triggers.is_empty());
        assert_eq!(assessment.confidence, ConfidenceLevel::Low);
    }
}
