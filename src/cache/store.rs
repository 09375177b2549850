//! Cache Store Module
//!
//! The timed cache: a mutex-guarded map of byte payloads purged by a background sweeper.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use crate::cache::CacheEntry;
use crate::tasks::spawn_sweeper;

/// Entry map shared between the cache handles and the sweeper task.
pub(crate) type EntryMap = Mutex<HashMap<String, CacheEntry>>;

// == Cache State ==
/// Lifecycle state of a [`TimedCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Sweeper active
    Running,
    /// Sweeper cancelled; entries are no longer purged in the background
    Stopped,
}

// == Timed Cache ==
/// In-memory cache of byte payloads whose entries expire after a fixed interval.
///
/// The cache is a cheap handle: clones share the same entries and the same
/// sweeper. The sweeper is cancelled by [`TimedCache::stop`],
/// [`TimedCache::shutdown`], or when the last handle is dropped.
#[derive(Debug, Clone)]
pub struct TimedCache {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    entries: Arc<EntryMap>,
    interval: Duration,
    token: CancellationToken,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

impl TimedCache {
    // == Constructor ==
    /// Creates an empty cache and starts its background sweeper.
    ///
    /// `interval` is both the sweep period and the staleness threshold.
    ///
    /// # Panics
    /// Panics if `interval` is zero or if called outside a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "sweep interval must be greater than zero");

        let entries: Arc<EntryMap> = Arc::new(Mutex::new(HashMap::new()));
        let token = CancellationToken::new();
        let handle = spawn_sweeper(Arc::downgrade(&entries), interval, token.clone());

        Self {
            inner: Arc::new(Inner {
                entries,
                interval,
                token,
                sweeper: Mutex::new(Some(handle)),
            }),
        }
    }

    // == Add ==
    /// Inserts or overwrites the payload stored under `key`.
    pub fn add(&self, key: impl Into<String>, payload: Vec<u8>) {
        let key = key.into();
        trace!(key = %key, bytes = payload.len(), "cache add");
        lock_entries(&self.inner.entries).insert(key, CacheEntry::new(payload));
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`, regardless of its age.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let payload = lock_entries(&self.inner.entries)
            .get(key)
            .map(|entry| entry.payload.clone());
        trace!(key, hit = payload.is_some(), "cache get");
        payload
    }

    // == Delete ==
    /// Removes the entry for `key`. Missing keys are ignored.
    pub fn delete(&self, key: &str) {
        lock_entries(&self.inner.entries).remove(key);
    }

    // == Purge Stale ==
    /// Runs one sweep pass now and returns the number of entries removed.
    pub fn purge_stale(&self) -> usize {
        purge_stale_entries(&self.inner.entries, self.inner.interval, Instant::now())
    }

    // == Interval ==
    /// Returns the configured sweep interval.
    pub fn interval(&self) -> Duration {
        self.inner.interval
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        lock_entries(&self.inner.entries).len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        lock_entries(&self.inner.entries).is_empty()
    }

    // == State ==
    /// Returns whether the sweeper is still running.
    pub fn state(&self) -> CacheState {
        if self.inner.token.is_cancelled() {
            CacheState::Stopped
        } else {
            CacheState::Running
        }
    }

    // == Stop ==
    /// Cancels the sweeper without waiting for it to exit.
    pub fn stop(&self) {
        if !self.inner.token.is_cancelled() {
            debug!("stopping cache sweeper");
            self.inner.token.cancel();
        }
    }

    // == Shutdown ==
    /// Cancels the sweeper and waits for its task to finish.
    ///
    /// Calling this more than once is harmless.
    pub async fn shutdown(&self) {
        self.stop();

        let handle = self
            .inner
            .sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!(error = %err, "cache sweeper did not exit cleanly");
            }
        }
    }
}

/// Locks the entry map, recovering the guard if a previous holder panicked.
///
/// Every mutation is a single map call, so a poisoned map is never torn.
pub(crate) fn lock_entries(entries: &EntryMap) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
    entries.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Removes every entry whose age at `now` has reached `interval`.
///
/// Holds the lock for the whole pass, so callers never observe a partial sweep.
pub(crate) fn purge_stale_entries(entries: &EntryMap, interval: Duration, now: Instant) -> usize {
    let mut map = lock_entries(entries);
    let before = map.len();
    map.retain(|_, entry| !entry.is_stale(interval, now));
    before - map.len()
}
