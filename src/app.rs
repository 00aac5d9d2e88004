use std::path::PathBuf;

use crate::core::batch::evaluate_villages;
use crate::core::config::ConfigManager;
use crate::core::coordinator::VillageReport;
use crate::core::error::Result;

/// Load settings from `config_dir`, evaluate every configured village and
/// print the reports to stdout as JSON.
pub async fn run(config_dir: PathBuf) -> Result<()> {
    let reports = evaluate_config_dir(config_dir).await?;
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

/// Evaluate the villages configured in `config_dir/settings.json`.
pub async fn evaluate_config_dir(config_dir: PathBuf) -> Result<Vec<VillageReport>> {
    let manager = ConfigManager::new(config_dir);
    let settings = manager.load();
    if settings.villages.is_empty() {
        log::warn!("No villages configured in {:?}", manager.path());
    }

    let reports = evaluate_villages(settings.villages.clone(), &settings).await?;
    for report in &reports {
        log::info!(
            "{}: {:.1} {} -> {}",
            report.village,
            report.assessment.score,
            report.assessment.category,
            report.summary.action
        );
    }
    Ok(reports)
}
