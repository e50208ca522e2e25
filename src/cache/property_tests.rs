//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the cache contracts across both variants.

use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};

use crate::cache::{MemorySessionStore, ResponseCache, SessionCache, TtlCache};

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys shaped like the application's logical query names
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9:_-]{0,40}"
}

/// Generates shaped payloads of the kinds the application caches
fn payload_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,64}".prop_map(Value::from),
        any::<u32>().prop_map(|n| json!({"id": n})),
        prop::collection::vec(any::<u32>(), 0..8).prop_map(|ids| json!({"movieIds": ids})),
    ]
}

/// A sequence of cache operations for stats accounting
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Value },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), payload_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any key and payload, a set followed by a get within the TTL
    // window returns exactly the stored payload.
    #[test]
    fn prop_ttl_roundtrip(key in key_strategy(), value in payload_strategy()) {
        let mut cache = TtlCache::new(TEST_TTL);

        cache.set(&key, value.clone());

        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // For any key, setting v1 then v2 before expiry makes get return v2.
    #[test]
    fn prop_replacement(
        key in key_strategy(),
        first in payload_strategy(),
        second in payload_strategy(),
    ) {
        let mut cache = TtlCache::new(TEST_TTL);

        cache.set(&key, first);
        cache.set(&key, second.clone());

        prop_assert_eq!(cache.get(&key), Some(second));
    }

    // After clear, every previously set key reads as absent.
    #[test]
    fn prop_clear_is_total(
        pairs in prop::collection::vec((key_strategy(), payload_strategy()), 1..20)
    ) {
        let mut cache = TtlCache::new(TEST_TTL);

        for (key, value) in &pairs {
            cache.set(key, value.clone());
        }
        cache.clear();

        prop_assert!(cache.is_empty());
        for (key, _) in &pairs {
            prop_assert_eq!(cache.get(key), None);
        }
    }

    // The hit and miss counters reflect exactly the get outcomes observed.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut cache = TtlCache::new(TEST_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => cache.set(&key, value),
                CacheOp::Get { key } => match cache.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, cache.len(), "Total entries mismatch");
    }

    // For any set of entries, destroying and reconstructing the session
    // cache against the same store returns every payload unchanged.
    #[test]
    fn prop_session_reconstruction_round_trip(
        pairs in prop::collection::vec((key_strategy(), payload_strategy()), 1..20)
    ) {
        let store = MemorySessionStore::new();

        {
            let mut cache = SessionCache::new(Arc::new(store.clone()));
            for (key, value) in &pairs {
                cache.set(key, value.clone());
            }
        }

        let mut reloaded = SessionCache::new(Arc::new(store));
        for (key, _) in &pairs {
            // A later pair may have replaced this key; the final write wins
            let expected = pairs
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone());
            prop_assert_eq!(reloaded.get(key), expected, "Mismatch for key {}", key);
        }
    }

    // has never disagrees with get for the session variant.
    #[test]
    fn prop_session_has_matches_get(key in key_strategy(), value in payload_strategy()) {
        let mut cache = SessionCache::new(Arc::new(MemorySessionStore::new()));

        prop_assert!(!cache.has(&key));
        cache.set(&key, value);
        prop_assert!(cache.has(&key));
    }
}
