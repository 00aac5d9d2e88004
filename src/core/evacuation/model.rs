//! Data model for households and evacuation phases.

use serde::{Deserialize, Serialize};

use super::planner::calculate_household_priority;
use crate::core::model::GeoPoint;

/// Drainage around a dwelling. Unknown labels read as `Fair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum DrainageQuality {
    Poor,
    #[default]
    Fair,
    Good,
}

impl DrainageQuality {
    /// Priority points contributed by this drainage class
    pub fn priority_points(&self) -> f64 {
        match self {
            Self::Poor => 30.0,
            Self::Fair => 15.0,
            Self::Good => 5.0,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "poor" => Self::Poor,
            "good" => Self::Good,
            _ => Self::Fair,
        }
    }
}

impl From<String> for DrainageQuality {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

/// Road access from a dwelling. Unknown labels read as `Moderate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum RoadAccess {
    Limited,
    #[default]
    Moderate,
    Good,
}

impl RoadAccess {
    /// Priority points contributed by this access class
    pub fn priority_points(&self) -> f64 {
        match self {
            Self::Limited => 25.0,
            Self::Moderate => 10.0,
            Self::Good => 0.0,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "limited" => Self::Limited,
            "good" => Self::Good,
            _ => Self::Moderate,
        }
    }
}

impl From<String> for RoadAccess {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

/// A household as it appears in a roster, before it is prioritized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdRecord {
    pub id: String,
    pub location: GeoPoint,
    /// Meters from the nearest unstable slope
    pub distance_to_slope: f64,
    #[serde(default)]
    pub drainage_quality: DrainageQuality,
    #[serde(default)]
    pub road_access: RoadAccess,
    pub occupants: u32,
}

/// An evacuation unit with its derived priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    /// Unique within a village
    pub id: String,
    pub location: GeoPoint,
    /// Meters from the nearest unstable slope (5-500)
    pub distance_to_slope: f64,
    pub drainage_quality: DrainageQuality,
    pub road_access: RoadAccess,
    pub occupants: u32,
    /// Urgency in [0, 100]
    pub priority_score: f64,
}

impl Household {
    /// Prioritize a roster entry against its village's risk score.
    pub fn assess(record: HouseholdRecord, village_risk_score: f64) -> Self {
        let priority_score = calculate_household_priority(
            record.distance_to_slope,
            record.drainage_quality,
            record.road_access,
            village_risk_score,
        );
        Self {
            id: record.id,
            location: record.location,
            distance_to_slope: record.distance_to_slope,
            drainage_quality: record.drainage_quality,
            road_access: record.road_access,
            occupants: record.occupants,
            priority_score,
        }
    }
}

/// Priority band a household is evacuated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EvacuationPhase {
    /// Phase 1, priority >= 75
    Immediate,
    /// Phase 2, priority in [60, 75)
    HighPriority,
    /// Phase 3, priority in [45, 60)
    ModeratePriority,
    /// Below 45: stay alert
    Monitoring,
}

impl EvacuationPhase {
    pub const ALL: [EvacuationPhase; 4] = [
        Self::Immediate,
        Self::HighPriority,
        Self::ModeratePriority,
        Self::Monitoring,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Immediate => "Phase 1: Immediate (0-30 min)",
            Self::HighPriority => "Phase 2: High Priority (30-120 min)",
            Self::ModeratePriority => "Phase 3: Moderate Priority (2-4 hours)",
            Self::Monitoring => "Monitoring: Stay Alert",
        }
    }
}

impl std::fmt::Display for EvacuationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Household and occupant counts per priority band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvacuationStatistics {
    pub total_households: usize,
    pub total_people: u32,
    pub critical_households: usize,
    pub critical_people: u32,
    pub high_priority_households: usize,
    pub high_priority_people: u32,
    pub moderate_priority_households: usize,
    pub moderate_priority_people: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_labels() {
        assert_eq!(DrainageQuality::from_label("Poor"), DrainageQuality::Poor);
        assert_eq!(DrainageQuality::from_label("swampy"), DrainageQuality::Fair);
        assert_eq!(RoadAccess::from_label("GOOD"), RoadAccess::Good);
        assert_eq!(RoadAccess::from_label("washed out"), RoadAccess::Moderate);
    }

    #[test]
    fn test_record_deserializes_with_unknown_labels() {
        let json = r#"{
            "id": "CHE-001",
            "location": { "lat": 25.26, "lon": 91.73 },
            "distance_to_slope": 40.0,
            "drainage_quality": "Blocked",
            "occupants": 5
        }"#;
        let record: HouseholdRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.drainage_quality, DrainageQuality::Fair);
        assert_eq!(record.road_access, RoadAccess::Moderate);
    }

    #[test]
    fn test_assess_sets_priority() {
        let record = HouseholdRecord {
            id: "DAW-007".to_string(),
            location: GeoPoint::new(25.11, 92.01),
            distance_to_slope: 250.0,
            drainage_quality: DrainageQuality::Fair,
            road_access: RoadAccess::Moderate,
            occupants: 4,
        };
        let household = Household::assess(record, 50.0);
        // 20 + 15 + 10 + 10
        assert!((household.priority_score - 55.0).abs() < 1e-9);
        assert_eq!(household.occupants, 4);
    }
}
