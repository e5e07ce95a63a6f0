//! Periodic cache refresh from the backing store

use super::cache::SettingCache;
use super::repository::SettingsRepository;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Default interval between refresh ticks
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Reload every record into the cache once
///
/// Returns the number of records merged.
pub async fn refresh_once(
    cache: &SettingCache,
    repo: &dyn SettingsRepository,
) -> anyhow::Result<usize> {
    let records = repo.find_all().await?;
    let count = records.len();
    cache.merge(records);
    Ok(count)
}

/// Spawn the refresh loop
///
/// The first tick fires immediately. A failed tick is logged and skipped; the
/// loop only ends when `cancel` is triggered.
pub fn spawn_refresher(
    cache: Arc<SettingCache>,
    repo: Arc<dyn SettingsRepository>,
    period: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    let period = period.max(Duration::from_secs(1));

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(period_secs = period.as_secs(), "Setting refresher started");

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            match refresh_once(&cache, repo.as_ref()).await {
                Ok(count) => tracing::trace!(records = count, "Setting cache refreshed"),
                Err(e) => tracing::warn!(error = %e, "Query setting records failed, skipping refresh"),
            }
        }

        tracing::info!("Setting refresher stopped");
    })
}
