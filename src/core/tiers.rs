// Severity tiers shared by the risk, evacuation and alert stages.
//
// Every score boundary used anywhere in the pipeline is defined here. The
// risk category, alert level, alert frequency, delivery channels and action
// card are all looked up from the same `RiskCategory` tier.

use serde::{Deserialize, Serialize};

use super::alerts::model::{AlertFrequency, AlertLevel, DeliveryChannel};

/// Lower bound of the Critical tier (inclusive).
pub const CRITICAL_THRESHOLD: f64 = 75.0;
/// Lower bound of the High tier (inclusive).
pub const HIGH_THRESHOLD: f64 = 60.0;
/// Lower bound of the Moderate tier (inclusive).
pub const MODERATE_THRESHOLD: f64 = 40.0;

/// Household priority at which Phase 3 starts. Phases 1 and 2 reuse the
/// Critical and High bounds.
pub const MODERATE_PRIORITY_THRESHOLD: f64 = 45.0;

/// Road cut percentage at which the primary evacuation route is compromised.
pub const ROAD_COMPROMISED_THRESHOLD: f64 = 20.0;

/// Risk category of a village, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskCategory {
    /// All tiers from least to most severe.
    pub const ALL: [RiskCategory; 4] = [Self::Low, Self::Moderate, Self::High, Self::Critical];

    /// Map a 0-100 score onto its tier. Boundaries are closed below, open above.
    pub fn from_score(score: f64) -> Self {
        if score >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Inclusive lower score bound of this tier.
    pub fn lower_bound(&self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Moderate => MODERATE_THRESHOLD,
            Self::High => HIGH_THRESHOLD,
            Self::Critical => CRITICAL_THRESHOLD,
        }
    }

    /// Exclusive upper score bound (100 for Critical, which is inclusive).
    pub fn upper_bound(&self) -> f64 {
        match self {
            Self::Low => MODERATE_THRESHOLD,
            Self::Moderate => HIGH_THRESHOLD,
            Self::High => CRITICAL_THRESHOLD,
            Self::Critical => 100.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Display color token for dashboards.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#4caf50",
            Self::Moderate => "#ffd700",
            Self::High => "#ff9800",
            Self::Critical => "#ff4444",
        }
    }

    pub fn alert_level(&self) -> AlertLevel {
        match self {
            Self::Low => AlertLevel::NoAlert,
            Self::Moderate => AlertLevel::Advisory,
            Self::High => AlertLevel::Warning,
            Self::Critical => AlertLevel::Evacuate,
        }
    }

    pub fn alert_frequency(&self) -> AlertFrequency {
        match self {
            Self::Low => AlertFrequency::Daily,
            Self::Moderate => AlertFrequency::Every6Hours,
            Self::High => AlertFrequency::Every2Hours,
            Self::Critical => AlertFrequency::Every15Minutes,
        }
    }

    /// Channels used at this tier. Each tier adds one channel to the previous.
    pub fn delivery_channels(&self) -> &'static [DeliveryChannel] {
        static CHANNELS: [DeliveryChannel; 4] = [
            DeliveryChannel::Sms,
            DeliveryChannel::VoiceIvr,
            DeliveryChannel::CommunityRadio,
            DeliveryChannel::EmergencySirens,
        ];
        let count = match self {
            Self::Low => 1,
            Self::Moderate => 2,
            Self::High => 3,
            Self::Critical => 4,
        };
        &CHANNELS[..count]
    }

    /// Headline action for the decision card.
    pub fn action(&self) -> &'static str {
        match self {
            Self::Low => "ROUTINE MONITORING",
            Self::Moderate => "ENHANCED MONITORING",
            Self::High => "PREPARE FOR EVACUATION",
            Self::Critical => "IMMEDIATE EVACUATION",
        }
    }

    pub fn priority_label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// What residents are expected to do at this tier.
    pub fn required_action(&self) -> &'static str {
        match self {
            Self::Low => "Monitor",
            Self::Moderate => "Prepare",
            Self::High => "Ready to evacuate",
            Self::Critical => "Immediate evacuation",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
