use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::alerts::engine::SMS_MAX_LENGTH;
use super::alerts::model::Language;
use super::coordinator::VillageProfile;

/// Evaluation settings, persisted as settings.json.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Language for rendered alerts
    #[serde(default)]
    pub alert_language: Language,
    #[serde(default = "default_sms_max_length")]
    pub sms_max_length: usize,
    /// Upper bound on villages evaluated at once
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_evaluations: usize,
    /// Villages to evaluate
    #[serde(default)]
    pub villages: Vec<VillageProfile>,
}

fn default_sms_max_length() -> usize {
    SMS_MAX_LENGTH
}

fn default_max_concurrent() -> usize {
    8
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alert_language: Language::English,
            sms_max_length: default_sms_max_length(),
            max_concurrent_evaluations: default_max_concurrent(),
            villages: Vec::new(),
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_dir: PathBuf) -> Self {
        Self {
            config_path: config_dir.join("settings.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load settings, falling back to defaults when the file is missing or invalid.
    pub fn load(&self) -> Settings {
        if !self.config_path.exists() {
            log::info!("No settings at {:?}, using defaults", self.config_path);
            return Settings::default();
        }
        match self.try_load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings at {:?}: {}", self.config_path, e);
                Settings::default()
            }
        }
    }

    /// Load settings, reporting read and parse failures.
    pub fn try_load(&self) -> crate::core::error::Result<Settings> {
        let content = fs::read_to_string(&self.config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evacuation::model::{DrainageQuality, HouseholdRecord, RoadAccess};
    use crate::core::model::{GeoPoint, RiskFactors};
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().join("nested"));

        let default = manager.load();
        assert_eq!(default, Settings::default());
        assert_eq!(default.sms_max_length, 160);

        let new_settings = Settings {
            alert_language: Language::Khasi,
            sms_max_length: 70,
            max_concurrent_evaluations: 2,
            villages: vec![VillageProfile {
                name: "Mawsynram".to_string(),
                location: GeoPoint::new(25.298, 91.58),
                population: 900,
                factors: RiskFactors::new(290.0, 38.0, 58.0, 18.0, 15.0),
                households: vec![HouseholdRecord {
                    id: "MAW-001".to_string(),
                    location: GeoPoint::new(25.299, 91.581),
                    distance_to_slope: 30.0,
                    drainage_quality: DrainageQuality::Poor,
                    road_access: RoadAccess::Limited,
                    occupants: 6,
                }],
            }],
        };

        manager.save(&new_settings).unwrap();
        let loaded = manager.load();

        assert_eq!(loaded, new_settings);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        fs::write(manager.path(), "{ not json").unwrap();

        assert!(manager.try_load().is_err());
        assert_eq!(manager.load(), Settings::default());
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());
        fs::write(manager.path(), r#"{ "alert_language": "Hindi" }"#).unwrap();

        let loaded = manager.load();
        assert_eq!(loaded.alert_language, Language::Hindi);
        assert_eq!(loaded.sms_max_length, 160);
        assert!(loaded.villages.is_empty());
    }
}
