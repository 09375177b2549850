//! Cache Module
//!
//! Provides the time-expiring, thread-safe response cache.

mod entry;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use store::{CacheState, TimedCache};

pub(crate) use store::{purge_stale_entries, EntryMap};

// == Public Constants ==
/// Default sweep interval used when none is configured
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 5_000;
