//! Cache Entry Module
//!
//! Defines a single timestamped payload held by the timed cache.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry: an opaque payload and its insertion time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, never interpreted by the cache
    pub payload: Vec<u8>,
    /// Instant captured when the entry was inserted
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            payload,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks if the entry has reached the staleness threshold.
    ///
    /// Boundary condition: an entry whose age equals `interval` exactly is stale.
    pub fn is_stale(&self, interval: Duration, now: Instant) -> bool {
        self.age(now) >= interval
    }
}
