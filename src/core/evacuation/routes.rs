// Static route and shelter reference data.

use serde::{Deserialize, Serialize};

use crate::core::tiers::ROAD_COMPROMISED_THRESHOLD;

/// Condition of the primary evacuation road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Good,
    Compromised,
}

impl RouteStatus {
    pub fn from_road_cuts(road_cuts: f64) -> Self {
        if road_cuts >= ROAD_COMPROMISED_THRESHOLD {
            Self::Compromised
        } else {
            Self::Good
        }
    }

    /// Short recommendation used on the decision card
    pub fn recommended_route(&self) -> &'static str {
        match self {
            Self::Good => "Route A (road intact)",
            Self::Compromised => "Route B (Route A compromised)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub primary: String,
    pub alternative: String,
    pub status: RouteStatus,
    pub recommendation: String,
}

/// Primary and alternative routes out of a village, with the one to use.
pub fn generate_evacuation_routes(village_name: &str, road_condition: f64) -> RoutePlan {
    let status = RouteStatus::from_road_cuts(road_condition);
    let recommendation = match status {
        RouteStatus::Good => "Use Route A (road intact)",
        RouteStatus::Compromised => "Use Route B (Route A compromised)",
    };
    RoutePlan {
        primary: format!("{village_name} Village Road → NH-106 → Relief Camp A (5 km)"),
        alternative: "Forest Path → State Highway → Relief Camp B (7 km)".to_string(),
        status,
        recommendation: recommendation.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelter {
    pub name: String,
    pub distance_km: f64,
    pub capacity: u32,
    pub kind: String,
}

/// Shelters nearest first, and whether they can take everyone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelterPlan {
    pub shelters: Vec<Shelter>,
    pub total_capacity: u32,
    /// People left without a place once every shelter is full
    pub shortfall: u32,
}

const SHELTERS: [(&str, f64, u32, &str); 3] = [
    ("School Building", 2.5, 200, "Designated Shelter"),
    ("Community Hall", 1.2, 150, "Emergency Shelter"),
    ("District Relief Camp", 5.0, 500, "Long-term Shelter"),
];

pub fn identify_shelter_capacity(num_people: u32) -> ShelterPlan {
    let mut shelters: Vec<Shelter> = SHELTERS
        .iter()
        .map(|(name, distance_km, capacity, kind)| Shelter {
            name: name.to_string(),
            distance_km: *distance_km,
            capacity: *capacity,
            kind: kind.to_string(),
        })
        .collect();
    shelters.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    let total_capacity = shelters.iter().map(|s| s.capacity).sum();
    ShelterPlan {
        shelters,
        total_capacity,
        shortfall: num_people.saturating_sub(total_capacity),
    }
}
