// Alert model types for escalation, delivery and audit records.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::tiers::RiskCategory;

/// Escalation state, totally ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertLevel {
    /// Explicit inactive state: routine monitoring only
    NoAlert,
    Advisory,
    Warning,
    Evacuate,
}

impl AlertLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoAlert => "No Alert",
            Self::Advisory => "Advisory",
            Self::Warning => "Warning",
            Self::Evacuate => "Evacuate",
        }
    }

    pub fn is_active(&self) -> bool {
        *self != Self::NoAlert
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How often an alert is repeated while its level holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertFrequency {
    Every15Minutes,
    Every2Hours,
    Every6Hours,
    Daily,
}

impl AlertFrequency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Every15Minutes => "every 15 minutes",
            Self::Every2Hours => "every 2 hours",
            Self::Every6Hours => "every 6 hours",
            Self::Daily => "daily",
        }
    }

    /// Repeat interval for schedulers
    pub fn interval(&self) -> Duration {
        let minutes = match self {
            Self::Every15Minutes => 15,
            Self::Every2Hours => 2 * 60,
            Self::Every6Hours => 6 * 60,
            Self::Daily => 24 * 60,
        };
        Duration::from_secs(minutes * 60)
    }
}

impl std::fmt::Display for AlertFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outbound channel. Delivery itself happens outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryChannel {
    Sms,
    VoiceIvr,
    CommunityRadio,
    EmergencySirens,
}

impl DeliveryChannel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::VoiceIvr => "Voice IVR",
            Self::CommunityRadio => "Community Radio",
            Self::EmergencySirens => "Emergency Sirens",
        }
    }
}

/// Supported message languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Khasi,
}

impl Language {
    pub const ALL: [Language; 3] = [Self::English, Self::Hindi, Self::Khasi];

    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Khasi => "Khasi",
        }
    }

    /// Parse a language name, falling back to English for anything unknown.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "hindi" => Self::Hindi,
            "khasi" => Self::Khasi,
            _ => Self::English,
        }
    }
}

impl From<String> for Language {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the escalation reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationRow {
    pub category: RiskCategory,
    pub score_range: String,
    pub alert_level: AlertLevel,
    pub frequency: AlertFrequency,
    pub channels: Vec<DeliveryChannel>,
    pub required_action: String,
}

/// A rendered alert for one village.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertMessage {
    pub village: String,
    /// Tier of the score the text was rendered for
    pub category: RiskCategory,
    pub level: AlertLevel,
    pub language: Language,
    pub text: String,
}

impl std::fmt::Display for AlertMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Everything that would be sent for one village, for auditing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub alert_level: AlertLevel,
    pub channels_used: Vec<DeliveryChannel>,
    pub sms_message: String,
    /// Full text read out on voice and radio channels
    pub voice_message: String,
    pub mobile_numbers_reached: usize,
    pub frequency: AlertFrequency,
    pub language: Language,
}

/// Outcome of a simulated delivery run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryRecord {
    NoAlertNeeded { alert_level: AlertLevel },
    Delivered(DeliveryReport),
}

impl DeliveryRecord {
    pub fn alert_level(&self) -> AlertLevel {
        match self {
            Self::NoAlertNeeded { alert_level } => *alert_level,
            Self::Delivered(report) => report.alert_level,
        }
    }
}

/// Whether an alert is live or the village is only being watched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Monitoring,
}

/// Audit metadata for an issued (or withheld) alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertMetadata {
    pub village: String,
    pub issued_at: DateTime<Utc>,
    pub risk_score: f64,
    pub alert_level: AlertLevel,
    pub channels: Vec<DeliveryChannel>,
    pub frequency: AlertFrequency,
    pub households_affected: usize,
    pub population_affected: u32,
    pub delivery_count: usize,
    pub status: AlertStatus,
}
