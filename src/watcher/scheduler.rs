//! Fixed-interval drive loop for the reconciliation job.
//!
//! The loop awaits each cycle before asking the ticker for the next tick,
//! so at most one cycle is ever in flight and the cache has exactly one
//! writer. A cycle that outlasts the interval delays subsequent ticks
//! (`MissedTickBehavior::Delay`) instead of letting them pile up.

use tokio::time::MissedTickBehavior;

use crate::cache::AlbumCache;
use crate::config::Config;

use super::job;
use super::traits::{AlbumsApi, Messenger};

/// Poll forever at the configured interval.
///
/// The first tick fires immediately, which establishes the cache baseline
/// right at startup instead of one interval later.
pub async fn run<A, M>(config: &Config, api: &A, messenger: &M, cache: &AlbumCache)
where
    A: AlbumsApi,
    M: Messenger,
{
    let mut ticker = tokio::time::interval(config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        tracing::info!("running poll cycle");

        match job::run_cycle(config, api, messenger, cache).await {
            Ok(report) => {
                tracing::info!(
                    tracked = report.targets.len(),
                    notified = report.notified(),
                    persisted = report.persisted,
                    "cycle complete"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "cycle failed, cached snapshot untouched");
            }
        }
    }
}
