//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the timed cache against a plain HashMap model.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};

use crate::cache::TimedCache;

// == Test Configuration ==
/// Long enough that the sweeper never fires during a case
const TEST_INTERVAL: Duration = Duration::from_secs(3600);

fn test_runtime() -> Runtime {
    Builder::new_current_thread().enable_all().build().unwrap()
}

// == Strategies ==
/// Generates cache keys shaped like resource URLs
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9/_-]{1,48}".prop_map(|s| format!("https://pokeapi.co/api/v2/{}", s))
}

/// Generates arbitrary payloads, including empty ones
fn payload_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, payload: Vec<u8> },
    Get { key: String },
    Delete { key: String },
}

/// Draws keys from a small pool so operations collide often
fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    let key = prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(String::from);
    prop_oneof![
        (key.clone(), payload_strategy()).prop_map(|(key, payload)| CacheOp::Add { key, payload }),
        key.clone().prop_map(|key| CacheOp::Get { key }),
        key.prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a payload and reading it back before any sweep returns the exact bytes.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), payload in payload_strategy()) {
        let rt = test_runtime();
        let _guard = rt.enter();
        let cache = TimedCache::new(TEST_INTERVAL);

        cache.add(key.clone(), payload.clone());

        prop_assert_eq!(cache.get(&key), Some(payload));
    }

    // The second of two writes to one key wins, leaving a single entry.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        first in payload_strategy(),
        second in payload_strategy()
    ) {
        let rt = test_runtime();
        let _guard = rt.enter();
        let cache = TimedCache::new(TEST_INTERVAL);

        cache.add(key.clone(), first);
        cache.add(key.clone(), second.clone());

        prop_assert_eq!(cache.get(&key), Some(second));
        prop_assert_eq!(cache.len(), 1);
    }

    // Deleting an entry makes it absent; deleting again changes nothing.
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), payload in payload_strategy()) {
        let rt = test_runtime();
        let _guard = rt.enter();
        let cache = TimedCache::new(TEST_INTERVAL);

        cache.add(key.clone(), payload);
        cache.delete(&key);
        prop_assert_eq!(cache.get(&key), None);

        cache.delete(&key);
        prop_assert!(cache.is_empty());
    }

    // Any sequence of operations behaves like a HashMap, and fresh entries survive a sweep.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..64)) {
        let rt = test_runtime();
        let _guard = rt.enter();
        let cache = TimedCache::new(TEST_INTERVAL);
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Add { key, payload } => {
                    cache.add(key.clone(), payload.clone());
                    model.insert(key, payload);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key), model.get(&key).cloned());
                }
                CacheOp::Delete { key } => {
                    cache.delete(&key);
                    model.remove(&key);
                }
            }
            prop_assert_eq!(cache.len(), model.len());
        }

        prop_assert_eq!(cache.purge_stale(), 0);
        prop_assert_eq!(cache.len(), model.len());
    }
}
