// Fleet evaluation: one independent pipeline run per village, in parallel.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::config::Settings;
use super::coordinator::{evaluate_village, VillageProfile, VillageReport};
use super::error::Result;

/// Evaluate every village concurrently. Reports come back in input order.
///
/// At most `settings.max_concurrent_evaluations` villages run at once.
pub async fn evaluate_villages(
    profiles: Vec<VillageProfile>,
    settings: &Settings,
) -> Result<Vec<VillageReport>> {
    let issued_at = Utc::now();
    let settings = Arc::new(settings.clone());
    let permits = Arc::new(Semaphore::new(settings.max_concurrent_evaluations.max(1)));
    let total = profiles.len();

    let mut tasks = JoinSet::new();
    for (index, profile) in profiles.into_iter().enumerate() {
        let settings = Arc::clone(&settings);
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            // The semaphore is never closed, so acquiring cannot fail.
            let _permit = permits.acquire_owned().await.ok();
            let report = tokio::task::spawn_blocking(move || {
                evaluate_village(&profile, &settings, issued_at)
            })
            .await?;
            Ok::<_, tokio::task::JoinError>((index, report))
        });
    }

    let mut indexed = Vec::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        indexed.push(joined??);
    }
    indexed.sort_by_key(|(index, _)| *index);

    log::info!("Evaluated {} villages", indexed.len());
    Ok(indexed.into_iter().map(|(_, report)| report).collect())
}
