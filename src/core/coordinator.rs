use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alerts::engine::{
    format_sms_alert, generate_alert_metadata, simulate_alert_delivery,
};
use super::alerts::model::{AlertMetadata, DeliveryRecord};
use super::config::Settings;
use super::evacuation::model::{EvacuationStatistics, Household, HouseholdRecord};
use super::evacuation::planner::{calculate_evacuation_statistics, generate_evacuation_phases};
use super::evacuation::routes::{
    generate_evacuation_routes, identify_shelter_capacity, RoutePlan, ShelterPlan,
};
use super::evacuation::summary::{generate_action_summary, ActionSummary};
use super::model::{GeoPoint, RiskFactors};
use super::risk::{assess, RiskAssessment};

/// Everything known about a village before evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillageProfile {
    pub name: String,
    pub location: GeoPoint,
    pub population: u32,
    pub factors: RiskFactors,
    #[serde(default)]
    pub households: Vec<HouseholdRecord>,
}

/// Full pipeline output for one village.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VillageReport {
    pub village: String,
    pub assessment: RiskAssessment,
    /// Roster sorted by descending priority
    pub households: Vec<Household>,
    /// Household ids per phase label
    pub phases: BTreeMap<String, Vec<String>>,
    pub statistics: EvacuationStatistics,
    pub routes: RoutePlan,
    pub shelters: ShelterPlan,
    pub summary: ActionSummary,
    pub sms: String,
    pub delivery: DeliveryRecord,
    pub metadata: AlertMetadata,
}

/// Run risk scoring, evacuation planning and alert escalation for a village.
pub fn evaluate_village(
    profile: &VillageProfile,
    settings: &Settings,
    issued_at: DateTime<Utc>,
) -> VillageReport {
    let assessment = assess(&profile.factors);
    let score = assessment.score;
    log::debug!(
        "{}: score {:.1} ({}), confidence {} ±{}",
        profile.name,
        score,
        assessment.category,
        assessment.confidence,
        assessment.uncertainty
    );

    let mut households: Vec<Household> = profile
        .households
        .iter()
        .cloned()
        .map(|record| Household::assess(record, score))
        .collect();
    households.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

    let phases: BTreeMap<String, Vec<String>> = generate_evacuation_phases(&households)
        .into_iter()
        .map(|(phase, members)| {
            let ids: Vec<String> = members.iter().map(|h| h.id.clone()).collect();
            (phase.label().to_string(), ids)
        })
        .collect();
    let statistics = calculate_evacuation_statistics(&households);
    let shelters = identify_shelter_capacity(statistics.total_people);
    if shelters.shortfall > 0 {
        log::warn!(
            "{}: shelters short by {} places for {} residents",
            profile.name,
            shelters.shortfall,
            statistics.total_people
        );
    }

    let language = settings.alert_language;
    let delivery = simulate_alert_delivery(&profile.name, score, households.len(), language);
    if let DeliveryRecord::Delivered(report) = &delivery {
        log::info!(
            "{}: {} alert, {} numbers {}",
            profile.name,
            report.alert_level,
            report.mobile_numbers_reached,
            report.frequency
        );
    }

    VillageReport {
        village: profile.name.clone(),
        routes: generate_evacuation_routes(&profile.name, profile.factors.road_cuts),
        summary: generate_action_summary(
            score,
            &households,
            &profile.name,
            profile.factors.road_cuts,
        ),
        sms: format_sms_alert(&profile.name, score, language, settings.sms_max_length),
        metadata: generate_alert_metadata(
            &profile.name,
            score,
            households.len(),
            profile.population,
            issued_at,
        ),
        assessment,
        households,
        phases,
        statistics,
        shelters,
        delivery,
    }
}
