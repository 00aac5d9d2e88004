// Decision card: one read-only aggregation over the risk tier, the household
// roster and the alert cadence.

use serde::{Deserialize, Serialize};

use super::model::Household;
use super::routes::RouteStatus;
use crate::core::alerts::engine::get_alert_frequency;
use crate::core::alerts::model::AlertFrequency;
use crate::core::tiers::{RiskCategory, CRITICAL_THRESHOLD, HIGH_THRESHOLD};

const FOCUS_AREAS: [&str; 4] = ["eastern slope", "northern ridge", "western valley", "southern approach"];

const ACTION_TIMEFRAME: &str = "Next 6 Hours";

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSummary {
    pub action: String,
    pub priority: String,
    pub category: RiskCategory,
    /// Households at priority >= 60
    pub households_evacuate: usize,
    /// Households at priority >= 75
    pub households_critical: usize,
    pub focus_area: String,
    pub route: String,
    pub alert_frequency: AlertFrequency,
    pub timeframe: String,
}

/// 64-bit FNV-1a over the UTF-8 bytes of `text`.
pub fn stable_hash(text: &str) -> u64 {
    text.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Area of the village to focus attention on.
///
/// Presentation flavor, not a measurement: a fixed function of the name so
/// every call for the same village agrees.
pub fn focus_area(village_name: &str) -> &'static str {
    FOCUS_AREAS[(stable_hash(village_name) % FOCUS_AREAS.len() as u64) as usize]
}

pub fn generate_action_summary(
    village_risk_score: f64,
    households: &[Household],
    village_name: &str,
    road_cuts: f64,
) -> ActionSummary {
    let category = RiskCategory::from_score(village_risk_score);
    let count_at = |threshold: f64| {
        households
            .iter()
            .filter(|h| h.priority_score >= threshold)
            .count()
    };

    ActionSummary {
        action: category.action().to_string(),
        priority: category.priority_label().to_string(),
        category,
        households_evacuate: count_at(HIGH_THRESHOLD),
        households_critical: count_at(CRITICAL_THRESHOLD),
        focus_area: focus_area(village_name).to_string(),
        route: RouteStatus::from_road_cuts(road_cuts).recommended_route().to_string(),
        alert_frequency: get_alert_frequency(village_risk_score),
        timeframe: ACTION_TIMEFRAME.to_string(),
    }
}
