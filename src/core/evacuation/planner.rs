// Household prioritization and phase bucketing.

use std::collections::BTreeMap;

use super::model::{DrainageQuality, EvacuationPhase, EvacuationStatistics, Household, RoadAccess};
use crate::core::tiers::{CRITICAL_THRESHOLD, HIGH_THRESHOLD, MODERATE_PRIORITY_THRESHOLD};

/// Distance beyond which proximity adds nothing.
const MAX_SLOPE_DISTANCE: f64 = 500.0;
const DISTANCE_POINTS: f64 = 40.0;
const VILLAGE_RISK_POINTS: f64 = 20.0;

/// Evacuation urgency of one household, in [0, 100].
///
/// The four terms can add up to 115, so households where several factors
/// line up saturate at 100.
pub fn calculate_household_priority(
    distance_to_slope: f64,
    drainage: DrainageQuality,
    access: RoadAccess,
    village_risk_score: f64,
) -> f64 {
    let distance = distance_to_slope.clamp(0.0, MAX_SLOPE_DISTANCE);
    let proximity = (MAX_SLOPE_DISTANCE - distance) / MAX_SLOPE_DISTANCE * DISTANCE_POINTS;
    let village = village_risk_score.clamp(0.0, 100.0) / 100.0 * VILLAGE_RISK_POINTS;

    (proximity + drainage.priority_points() + access.priority_points() + village).clamp(0.0, 100.0)
}

/// Phase band for a priority score
pub fn phase_for_priority(priority: f64) -> EvacuationPhase {
    if priority >= CRITICAL_THRESHOLD {
        EvacuationPhase::Immediate
    } else if priority >= HIGH_THRESHOLD {
        EvacuationPhase::HighPriority
    } else if priority >= MODERATE_PRIORITY_THRESHOLD {
        EvacuationPhase::ModeratePriority
    } else {
        EvacuationPhase::Monitoring
    }
}

/// Split a roster into phases.
///
/// Every phase is present (possibly empty), every household lands in exactly
/// one, and roster order is kept within a phase.
pub fn generate_evacuation_phases(
    households: &[Household],
) -> BTreeMap<EvacuationPhase, Vec<&Household>> {
    let mut phases: BTreeMap<EvacuationPhase, Vec<&Household>> = EvacuationPhase::ALL
        .iter()
        .map(|phase| (*phase, Vec::new()))
        .collect();

    for household in households {
        phases
            .entry(phase_for_priority(household.priority_score))
            .or_default()
            .push(household);
    }
    phases
}

pub fn calculate_evacuation_statistics(households: &[Household]) -> EvacuationStatistics {
    let mut stats = EvacuationStatistics {
        total_households: households.len(),
        ..Default::default()
    };

    for household in households {
        stats.total_people += household.occupants;
        match phase_for_priority(household.priority_score) {
            EvacuationPhase::Immediate => {
                stats.critical_households += 1;
                stats.critical_people += household.occupants;
            }
            EvacuationPhase::HighPriority => {
                stats.high_priority_households += 1;
                stats.high_priority_people += household.occupants;
            }
            EvacuationPhase::ModeratePriority => {
                stats.moderate_priority_households += 1;
                stats.moderate_priority_people += household.occupants;
            }
            EvacuationPhase::Monitoring => {}
        }
    }
    stats
}
