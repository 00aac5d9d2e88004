use aegis_risk::core::alerts::model::{AlertFrequency, AlertLevel, DeliveryChannel, Language};
use aegis_risk::core::evacuation::model::{
    DrainageQuality, EvacuationPhase, Household, HouseholdRecord, RoadAccess,
};
use aegis_risk::core::model::{GeoPoint, RiskFactors};
use aegis_risk::core::risk::assess;
use aegis_risk::core::risk::triggers::ConfidenceLevel;
use aegis_risk::core::tiers::RiskCategory;
use aegis_risk::core::AegisError;
use aegis_risk::{
    calculate_evacuation_statistics, compute_risk_score, determine_alert_level,
    format_sms_alert, generate_alert_message, generate_evacuation_phases, get_alert_frequency,
    get_delivery_channels, get_risk_category,
};

#[test]
fn critical_village_end_to_end() {
    let factors = RiskFactors::new(320.0, 42.0, 65.0, 20.0, 18.0);

    let score = compute_risk_score(&factors);
    assert!((score - 75.8667).abs() < 1e-3, "got {score}");

    let (category, _) = get_risk_category(score);
    assert_eq!(category, RiskCategory::Critical);
    assert_eq!(determine_alert_level(score), AlertLevel::Evacuate);
    assert_eq!(
        get_delivery_channels(score),
        vec![
            DeliveryChannel::Sms,
            DeliveryChannel::VoiceIvr,
            DeliveryChannel::CommunityRadio,
            DeliveryChannel::EmergencySirens,
        ]
    );
    assert_eq!(get_alert_frequency(score), AlertFrequency::Every15Minutes);
    assert_eq!(get_alert_frequency(score).label(), "every 15 minutes");

    let assessment = assess(&factors);
    assert_eq!(assessment.confidence, ConfidenceLevel::High);
    assert_eq!(assessment.uncertainty, 5);
    assert_eq!(assessment.active_triggers.len(), 5);
}

#[test]
fn roster_flows_into_phases_and_alerts() {
    let factors = RiskFactors::new(280.0, 45.0, 72.0, 28.0, 25.0);
    let score = compute_risk_score(&factors);

    let records = [
        (30.0, "Poor", "Limited", 5),
        (50.0, "Poor", "Limited", 4),
        (100.0, "Fair", "Moderate", 6),
        (150.0, "Fair", "Good", 3),
        (480.0, "Good", "Good", 2),
    ];
    let households: Vec<Household> = records
        .iter()
        .enumerate()
        .map(|(i, (distance, drainage, access, occupants))| {
            Household::assess(
                HouseholdRecord {
                    id: format!("SHP-{:03}", i + 1),
                    location: GeoPoint::new(25.575, 91.88),
                    distance_to_slope: *distance,
                    drainage_quality: DrainageQuality::from_label(drainage),
                    road_access: RoadAccess::from_label(access),
                    occupants: *occupants,
                },
                score,
            )
        })
        .collect();

    let phases = generate_evacuation_phases(&households);
    let stats = calculate_evacuation_statistics(&households);
    let placed: usize = phases.values().map(Vec::len).sum();
    assert_eq!(placed, households.len());
    assert_eq!(stats.critical_households, phases[&EvacuationPhase::Immediate].len());
    assert_eq!(stats.total_people, 20);

    let sms = format_sms_alert("Shillong Peak", score, Language::Khasi, 160);
    assert!(sms.contains("Shillong Peak"));
}

#[test]
fn quiet_village_sends_nothing() {
    for language in Language::ALL {
        assert!(format_sms_alert("Nongriat", 30.0, language, 160).is_empty());
    }
    let err = generate_alert_message("Nongriat", 30.0, AlertLevel::NoAlert, Language::English)
        .unwrap_err();
    assert!(matches!(err, AegisError::UnsupportedCombination { .. }));
}
