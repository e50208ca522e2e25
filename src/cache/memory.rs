//! In-Memory TTL Cache
//!
//! TTL-bounded variant of the response cache. Entries expire a fixed
//! duration after being written and are purged lazily on lookup.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats, ResponseCache};

// == TTL Cache ==
/// In-memory response cache with a fixed TTL configured at construction.
///
/// Expiry is evaluated lazily at read time. The key set is small (a handful
/// of named queries), so there is no background sweep; an expired entry
/// costs at most one extra upstream fetch.
#[derive(Debug)]
pub struct TtlCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Fixed validity window for every entry
    ttl: Duration,
    /// Hit/miss statistics
    stats: CacheStats,
}

impl TtlCache {
    // == Constructor ==
    /// Creates a new TtlCache whose entries are valid for `ttl` after each write.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl ResponseCache for TtlCache {
    // == Get ==
    /// Returns the payload under `key` if present and fresh.
    ///
    /// A found-but-stale entry is removed before returning `None`.
    fn get(&mut self, key: &str) -> Option<Value> {
        let fresh = match self.entries.get(key) {
            Some(entry) if entry.is_fresh(self.ttl) => Some(entry.value.clone()),
            Some(_) => None,
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        match fresh {
            Some(value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                // Lazy eviction of the stale entry
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key` with the current timestamp, replacing any
    /// prior entry. Always succeeds.
    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Empties the cache entirely.
    fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Length ==
    fn len(&self) -> usize {
        self.entries.len()
    }

    // == Stats ==
    fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;

    fn cache() -> TtlCache {
        TtlCache::new(Duration::from_secs(300))
    }

    #[test]
    fn test_set_and_get() {
        let mut cache = cache();

        cache.set("trending", json!([{"id": 155}]));
        let value = cache.get("trending");

        assert_eq!(value, Some(json!([{"id": 155}])));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_absent_is_none() {
        let mut cache = cache();
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn test_set_replaces_prior_entry() {
        let mut cache = cache();

        cache.set("popular", json!("first"));
        cache.set("popular", json!("second"));

        assert_eq!(cache.get("popular"), Some(json!("second")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entry_returns_none() {
        let mut cache = TtlCache::new(Duration::from_millis(50));

        cache.set("movie:155", json!({"title": "The Dark Knight"}));
        assert!(cache.get("movie:155").is_some());

        sleep(Duration::from_millis(80));

        assert_eq!(cache.get("movie:155"), None);
    }

    #[test]
    fn test_lazy_eviction_removes_expired_entry() {
        let mut cache = TtlCache::new(Duration::from_millis(50));

        cache.set("search:batman", json!([]));
        sleep(Duration::from_millis(80));

        // The expired entry lingers until a lookup observes it
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("search:batman"), None);
        assert_eq!(cache.len(), 0);
        assert!(!cache.has("search:batman"));
    }

    #[test]
    fn test_rewrite_resets_timestamp() {
        let mut cache = TtlCache::new(Duration::from_millis(100));

        cache.set("tvShows", json!(1));
        sleep(Duration::from_millis(60));
        cache.set("tvShows", json!(2));
        sleep(Duration::from_millis(60));

        // 120ms after the first write but only 60ms after the second
        assert_eq!(cache.get("tvShows"), Some(json!(2)));
    }

    #[test]
    fn test_clear_is_total() {
        let mut cache = cache();

        cache.set("trending", json!(1));
        cache.set("popular", json!(2));
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get("trending"), None);
        assert_eq!(cache.get("popular"), None);
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let mut cache = cache();

        cache.set("trending", json!([]));
        cache.get("trending"); // hit
        cache.get("nonexistent"); // miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
