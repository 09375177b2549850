//! Cache Sweeper Task
//!
//! Background task that periodically removes stale timed-cache entries.

use std::sync::Weak;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::cache::{purge_stale_entries, EntryMap};

/// Spawns the sweeper for one timed cache.
///
/// Every `interval` the task removes entries whose age has reached `interval`.
/// It holds only a weak reference to the entry map and exits when the map is
/// dropped or when `token` is cancelled, whichever happens first.
///
/// # Arguments
/// * `entries` - Weak reference to the cache's entry map
/// * `interval` - Sweep period and staleness threshold
/// * `token` - Cancellation token owned by the cache
///
/// # Returns
/// A JoinHandle for the spawned task, awaited by `TimedCache::shutdown`.
pub(crate) fn spawn_sweeper(
    entries: Weak<EntryMap>,
    interval: Duration,
    token: CancellationToken,
) -> JoinHandle<()> {
    // First pass happens one full interval after construction
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::spawn(async move {
        debug!(interval_ms = interval.as_millis() as u64, "cache sweeper started");

        loop {
            tokio::select! {
                biased;

                _ = token.cancelled() => {
                    debug!("cache sweeper cancelled");
                    break;
                }
                _ = ticker.tick() => {
                    let Some(entries) = entries.upgrade() else {
                        debug!("cache dropped, sweeper exiting");
                        break;
                    };

                    let removed = purge_stale_entries(&entries, interval, Instant::now());

                    if removed > 0 {
                        debug!("cache sweep: removed {} stale entries", removed);
                    } else {
                        trace!("cache sweep: no stale entries found");
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use crate::cache::CacheEntry;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn map_with(key: &str) -> Arc<EntryMap> {
        let mut map = HashMap::new();
        map.insert(key.to_string(), CacheEntry::new(b"value".to_vec()));
        Arc::new(Mutex::new(map))
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_removes_stale_entries() {
        let entries = map_with("expire_soon");
        let token = CancellationToken::new();

        let handle = spawn_sweeper(Arc::downgrade(&entries), INTERVAL, token.clone());

        time::sleep(INTERVAL + Duration::from_millis(10)).await;

        assert!(entries.lock().unwrap().is_empty(), "Stale entry should have been swept");

        token.cancel();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_waits_one_interval_before_first_pass() {
        let entries = map_with("young");
        let token = CancellationToken::new();

        let handle = spawn_sweeper(Arc::downgrade(&entries), INTERVAL, token.clone());

        time::sleep(INTERVAL / 2).await;

        assert!(entries.lock().unwrap().contains_key("young"));

        token.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_sweeper_stops_on_cancel() {
        let entries = map_with("key");
        let token = CancellationToken::new();

        let handle = spawn_sweeper(Arc::downgrade(&entries), INTERVAL, token.clone());
        token.cancel();

        handle.await.unwrap();
        assert!(entries.lock().unwrap().contains_key("key"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_exits_when_map_dropped() {
        let entries = map_with("key");
        let token = CancellationToken::new();

        let handle = spawn_sweeper(Arc::downgrade(&entries), INTERVAL, token);
        drop(entries);

        time::sleep(INTERVAL * 2).await;
        assert!(handle.is_finished(), "Sweeper should exit once the map is gone");
    }
}
