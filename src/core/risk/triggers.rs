// Trigger evaluation and confidence estimation.
//
// A trigger is a single factor crossing its alerting threshold. Triggers are
// independent of the weighted score: they feed the confidence band and the
// situational-awareness list shown next to a score.

use serde::{Deserialize, Serialize};

use crate::core::model::RiskFactors;

/// Identifier for each threshold trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerId {
    Rainfall,
    Slope,
    Saturation,
    RoadCuts,
    Deforestation,
}

impl TriggerId {
    /// Order used when naming triggers in a confidence explanation
    pub const CONFIDENCE_ORDER: [TriggerId; 5] = [
        Self::Rainfall,
        Self::Slope,
        Self::Saturation,
        Self::RoadCuts,
        Self::Deforestation,
    ];

    /// Order used for the human-readable trigger list
    pub const DESCRIPTION_ORDER: [TriggerId; 5] = [
        Self::Rainfall,
        Self::Saturation,
        Self::RoadCuts,
        Self::Deforestation,
        Self::Slope,
    ];

    /// Short name used in explanations
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rainfall => "rainfall",
            Self::Slope => "slope",
            Self::Saturation => "saturation",
            Self::RoadCuts => "road-cuts",
            Self::Deforestation => "deforestation",
        }
    }

    /// Reading above which the trigger fires (strictly greater).
    pub fn threshold(&self) -> f64 {
        match self {
            Self::Rainfall => 250.0,
            Self::Slope => 40.0,
            Self::Saturation => 60.0,
            Self::RoadCuts => 15.0,
            Self::Deforestation => 15.0,
        }
    }

    fn reading(&self, factors: &RiskFactors) -> f64 {
        match self {
            Self::Rainfall => factors.rainfall,
            Self::Slope => factors.slope,
            Self::Saturation => factors.soil_moisture,
            Self::RoadCuts => factors.road_cuts,
            Self::Deforestation => factors.deforestation,
        }
    }

    pub fn is_active(&self, factors: &RiskFactors) -> bool {
        self.reading(factors) > self.threshold()
    }
}

/// Evaluate a specific trigger against a reading.
/// Returns Some(description) if the trigger fired, None otherwise.
pub fn evaluate_trigger(id: TriggerId, factors: &RiskFactors) -> Option<String> {
    if !id.is_active(factors) {
        return None;
    }
    let value = id.reading(factors);
    Some(match id {
        TriggerId::Rainfall => format!("Rainfall crossed threshold ({value:.0} mm)"),
        TriggerId::Saturation => format!("Slope saturation detected ({value:.0}% moisture)"),
        TriggerId::RoadCuts => {
            format!("Significant road cutting detected ({value:.0}% area affected)")
        }
        TriggerId::Deforestation => format!("Vegetation loss critical ({value:.0}% deforested)"),
        TriggerId::Slope => format!("Steep slope instability ({value:.0}° average)"),
    })
}

/// Descriptions of every active trigger, in display order.
pub fn identify_active_triggers(factors: &RiskFactors) -> Vec<String> {
    TriggerId::DESCRIPTION_ORDER
        .iter()
        .filter_map(|id| evaluate_trigger(*id, factors))
        .collect()
}

/// Qualitative trust in a score, ordered from least to most confident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    MediumLow,
    Medium,
    HighMedium,
    High,
}

impl ConfidenceLevel {
    pub fn from_trigger_count(count: usize) -> Self {
        match count {
            0 => Self::Low,
            1 => Self::MediumLow,
            2 => Self::Medium,
            3 => Self::HighMedium,
            _ => Self::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::MediumLow => "Medium-Low",
            Self::Medium => "Medium",
            Self::HighMedium => "High-Medium",
            Self::High => "High",
        }
    }

    /// Uncertainty band in ± score points
    pub fn uncertainty(&self) -> u8 {
        match self {
            Self::Low => 15,
            Self::MediumLow => 12,
            Self::Medium => 10,
            Self::HighMedium => 7,
            Self::High => 5,
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Confidence label, ± uncertainty and the reason behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBand {
    pub confidence: ConfidenceLevel,
    pub uncertainty: u8,
    pub explanation: String,
}

/// Confidence from trigger diversity, not magnitude.
///
/// Several independently active triggers corroborate each other; a score
/// driven by one extreme factor gets a wider band.
pub fn calculate_confidence_level(factors: &RiskFactors) -> ConfidenceBand {
    let names: Vec<&str> = TriggerId::CONFIDENCE_ORDER
        .iter()
        .filter(|id| id.is_active(factors))
        .map(|id| id.name())
        .collect();
    let confidence = ConfidenceLevel::from_trigger_count(names.len());
    let listed = names.iter().take(3).copied().collect::<Vec<_>>().join(", ");

    let explanation = match confidence {
        ConfidenceLevel::High => format!("Multiple independent factors detected ({listed})"),
        ConfidenceLevel::HighMedium => format!("Strong multi-factor signal ({listed})"),
        ConfidenceLevel::Medium => format!("Moderate confidence with 2 factors ({listed})"),
        ConfidenceLevel::MediumLow => format!("Single dominant factor ({listed})"),
        ConfidenceLevel::Low => "Limited trigger activation".to_string(),
    };

    ConfidenceBand {
        confidence,
        uncertainty: confidence.uncertainty(),
        explanation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_active() -> RiskFactors {
        RiskFactors::new(320.0, 42.0, 65.0, 20.0, 18.0)
    }

    #[test]
    fn test_no_triggers_below_thresholds() {
        // thresholds are strict: sitting exactly on one does not fire
        let factors = RiskFactors::new(250.0, 40.0, 60.0, 15.0, 15.0);
        assert!(identify_active_triggers(&factors).is_empty());

        let band = calculate_confidence_level(&factors);
        assert_eq!(band.confidence, ConfidenceLevel::Low);
        assert_eq!(band.uncertainty, 15);
        assert_eq!(band.explanation, "Limited trigger activation");
    }

    #[test]
    fn test_trigger_descriptions_in_display_order() {
        let triggers = identify_active_triggers(&all_active());
        assert_eq!(
            triggers,
            vec![
                "Rainfall crossed threshold (320 mm)",
                "Slope saturation detected (65% moisture)",
                "Significant road cutting detected (18% area affected)",
                "Vegetation loss critical (20% deforested)",
                "Steep slope instability (42° average)",
            ]
        );
    }

    #[test]
    fn test_single_trigger() {
        let factors = RiskFactors::new(0.0, 45.0, 0.0, 0.0, 0.0);
        assert!(evaluate_trigger(TriggerId::Slope, &factors).is_some());
        assert!(evaluate_trigger(TriggerId::Rainfall, &factors).is_none());

        let band = calculate_confidence_level(&factors);
        assert_eq!(band.confidence, ConfidenceLevel::MediumLow);
        assert_eq!(band.uncertainty, 12);
        assert_eq!(band.explanation, "Single dominant factor (slope)");
    }

    #[test]
    fn test_confidence_bands_by_count() {
        let cases = [
            (RiskFactors::new(300.0, 45.0, 0.0, 0.0, 0.0), ConfidenceLevel::Medium, 10),
            (RiskFactors::new(300.0, 45.0, 70.0, 0.0, 0.0), ConfidenceLevel::HighMedium, 7),
            (RiskFactors::new(300.0, 45.0, 70.0, 0.0, 20.0), ConfidenceLevel::High, 5),
            (all_active(), ConfidenceLevel::High, 5),
        ];
        for (factors, expected, uncertainty) in cases {
            let band = calculate_confidence_level(&factors);
            assert_eq!(band.confidence, expected, "{factors:?}");
            assert_eq!(band.uncertainty, uncertainty);
        }
    }

    #[test]
    fn test_explanation_names_at_most_three() {
        let band = calculate_confidence_level(&all_active());
        assert_eq!(
            band.explanation,
            "Multiple independent factors detected (rainfall, slope, saturation)"
        );
    }

    #[test]
    fn test_confidence_monotone_in_trigger_count() {
        // activate triggers one at a time, in every starting position
        let activations: [fn(&mut RiskFactors); 5] = [
            |f: &mut RiskFactors| f.rainfall = 300.0,
            |f: &mut RiskFactors| f.slope = 45.0,
            |f: &mut RiskFactors| f.soil_moisture = 70.0,
            |f: &mut RiskFactors| f.road_cuts = 20.0,
            |f: &mut RiskFactors| f.deforestation = 20.0,
        ];
        for start in 0..activations.len() {
            let mut factors = RiskFactors::default();
            let mut previous = calculate_confidence_level(&factors);
            for step in 0..activations.len() {
                activations[(start + step) % activations.len()](&mut factors);
                let current = calculate_confidence_level(&factors);
                assert!(current.confidence >= previous.confidence);
                assert!(current.uncertainty <= previous.uncertainty);
                previous = current;
            }
        }
    }
}
