// Alert engine - maps risk scores onto escalation level, cadence, channels
// and localized messages.

use chrono::{DateTime, Utc};

use super::model::{
    AlertFrequency, AlertLevel, AlertMessage, AlertMetadata, AlertStatus, DeliveryChannel,
    DeliveryRecord, DeliveryReport, EscalationRow, Language,
};
use super::templates;
use crate::core::error::{AegisError, Result};
use crate::core::tiers::RiskCategory;

/// Standard SMS length limit
pub const SMS_MAX_LENGTH: usize = 160;

/// Assumed reachable phone numbers per household
pub const PHONES_PER_HOUSEHOLD: usize = 2;

const ELLIPSIS: &str = "...";

pub fn determine_alert_level(score: f64) -> AlertLevel {
    RiskCategory::from_score(score).alert_level()
}

pub fn get_alert_frequency(score: f64) -> AlertFrequency {
    RiskCategory::from_score(score).alert_frequency()
}

/// Channels for a score. Higher scores always use a superset of channels.
pub fn get_delivery_channels(score: f64) -> Vec<DeliveryChannel> {
    RiskCategory::from_score(score).delivery_channels().to_vec()
}

/// Render the localized message for a village.
///
/// Fails with `UnsupportedCombination` when no template exists for the
/// level, which is the case for `AlertLevel::NoAlert`.
pub fn generate_alert_message(
    village_name: &str,
    score: f64,
    level: AlertLevel,
    language: Language,
) -> Result<AlertMessage> {
    let template = templates::template(level, language)
        .ok_or(AegisError::UnsupportedCombination { level, language })?;
    let category = RiskCategory::from_score(score);
    Ok(AlertMessage {
        village: village_name.to_string(),
        category,
        level,
        language,
        text: templates::render(template, village_name, category.label()),
    })
}

/// Message sized for SMS, or empty when no alert is needed.
///
/// Over-long messages are cut to `max_length - 3` characters plus "...".
/// Limits below 3 keep only as many dots as fit. Lengths count characters,
/// so Devanagari text is never split mid-codepoint.
pub fn format_sms_alert(
    village_name: &str,
    score: f64,
    language: Language,
    max_length: usize,
) -> String {
    let level = determine_alert_level(score);
    let Ok(message) = generate_alert_message(village_name, score, level, language) else {
        return String::new();
    };

    if message.text.chars().count() <= max_length {
        return message.text;
    }
    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = message.text.chars().take(keep).collect();
    truncated.push_str(&ELLIPSIS[..max_length.min(ELLIPSIS.len())]);
    truncated
}

/// Reference table of the four escalation tiers
pub fn create_alert_escalation_matrix() -> Vec<EscalationRow> {
    RiskCategory::ALL
        .iter()
        .map(|tier| EscalationRow {
            category: *tier,
            score_range: format!("{:.0}-{:.0}", tier.lower_bound(), tier.upper_bound()),
            alert_level: tier.alert_level(),
            frequency: tier.alert_frequency(),
            channels: tier.delivery_channels().to_vec(),
            required_action: tier.required_action().to_string(),
        })
        .collect()
}

/// Bundle what would be sent to a village. Nothing is dispatched.
pub fn simulate_alert_delivery(
    village_name: &str,
    score: f64,
    households: usize,
    language: Language,
) -> DeliveryRecord {
    let alert_level = determine_alert_level(score);
    let Ok(message) = generate_alert_message(village_name, score, alert_level, language) else {
        return DeliveryRecord::NoAlertNeeded { alert_level };
    };

    DeliveryRecord::Delivered(DeliveryReport {
        alert_level,
        channels_used: get_delivery_channels(score),
        sms_message: format_sms_alert(village_name, score, language, SMS_MAX_LENGTH),
        voice_message: message.text,
        mobile_numbers_reached: households * PHONES_PER_HOUSEHOLD,
        frequency: get_alert_frequency(score),
        language,
    })
}

/// Audit record for an alert decision. The caller supplies the timestamp.
pub fn generate_alert_metadata(
    village_name: &str,
    score: f64,
    households_affected: usize,
    population: u32,
    issued_at: DateTime<Utc>,
) -> AlertMetadata {
    let alert_level = determine_alert_level(score);
    AlertMetadata {
        village: village_name.to_string(),
        issued_at,
        risk_score: score,
        alert_level,
        channels: get_delivery_channels(score),
        frequency: get_alert_frequency(score),
        households_affected,
        population_affected: population,
        delivery_count: households_affected * PHONES_PER_HOUSEHOLD,
        status: if alert_level.is_active() {
            AlertStatus::Active
        } else {
            AlertStatus::Monitoring
        },
    }
}
