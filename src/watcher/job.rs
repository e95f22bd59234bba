//! One reconciliation cycle: fetch, compare, alert, persist.
//!
//! The ordering is load-bearing:
//! 1. Fetch the fresh snapshot. A fetch failure abandons the cycle before
//!    anything else happens, so the cache stays byte-identical and no alert
//!    can be based on incomplete data.
//! 2. Load the cached snapshot and diff each tracked album against it.
//! 3. Alert on every non-zero delta. A failed send is logged and absorbed.
//! 4. Persist the fresh snapshot, whether or not anything was sent. A failed
//!    save is logged and absorbed; the alert already went out.
//!
//! Only the fetch error escapes this function. Everything downstream of a
//! successful fetch favors completing the cycle over strict delivery.

use crate::cache::AlbumCache;
use crate::config::Config;
use crate::diff;
use crate::immich::FetchError;

use super::traits::{AlbumsApi, Messenger};

/// What happened to one tracked album during a cycle.
#[derive(Debug, PartialEq, Eq)]
pub enum TargetOutcome {
    /// Album missing from the fresh snapshot; nothing to report on
    NotFound,
    /// Delta was zero; alert suppressed
    Unchanged,
    /// Alert delivered
    Notified { delta: i64 },
    /// Alert attempted but delivery failed; not retried
    NotifyFailed { delta: i64 },
}

/// Summary of one completed cycle (fetch succeeded).
#[derive(Debug)]
pub struct CycleReport {
    /// Per-target outcomes, in configured order
    pub targets: Vec<(String, TargetOutcome)>,
    /// Whether the fresh snapshot reached disk
    pub persisted: bool,
}

impl CycleReport {
    /// Number of alerts that were actually delivered.
    pub fn notified(&self) -> usize {
        self.targets
            .iter()
            .filter(|(_, outcome)| matches!(outcome, TargetOutcome::Notified { .. }))
            .count()
    }
}

/// Alert text for a changed album. The count keeps its sign, so a shrinking
/// album reads as "-3 new media".
fn alert_text(album: &str, delta: i64) -> String {
    format!("[{album}] album has {delta:+} new media uploaded!")
}

/// Run one reconciliation cycle.
///
/// Returns `Err` only when the fetch failed; the cache is untouched in that
/// case. Every other failure is absorbed into the [`CycleReport`].
pub async fn run_cycle<A, M>(
    config: &Config,
    api: &A,
    messenger: &M,
    cache: &AlbumCache,
) -> Result<CycleReport, FetchError>
where
    A: AlbumsApi,
    M: Messenger,
{
    let fresh = api.all_albums().await?;
    let cached = cache.load();

    let mut targets = Vec::with_capacity(config.albums.len());
    for name in &config.albums {
        let outcome = match diff::asset_delta(cached.as_deref(), &fresh, name) {
            None => {
                tracing::info!(album = %name, "tracked album not present in fetched snapshot");
                TargetOutcome::NotFound
            }
            Some(0) => {
                tracing::debug!(album = %name, "no change");
                TargetOutcome::Unchanged
            }
            Some(delta) => {
                tracing::info!(album = %name, delta, "media count changed");
                match messenger.send(&config.chat_id, &alert_text(name, delta)).await {
                    Ok(()) => TargetOutcome::Notified { delta },
                    Err(e) => {
                        tracing::warn!(album = %name, error = %e, "alert delivery failed");
                        TargetOutcome::NotifyFailed { delta }
                    }
                }
            }
        };
        targets.push((name.clone(), outcome));
    }

    let persisted = match cache.save(&fresh) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, "failed to persist snapshot, next cycle will re-diff against the old one");
            false
        }
    };

    Ok(CycleReport { targets, persisted })
}
