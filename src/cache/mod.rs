//! Cache Module
//!
//! Two-tier response caching for shaped catalog payloads: a TTL-bounded
//! in-memory cache for volatile lookups and a session-durable cache that
//! mirrors itself into a session-scoped text store.

mod entry;
mod memory;
mod session;
mod stats;

#[cfg(test)]
mod property_tests;

use serde_json::Value;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::TtlCache;
pub use session::{MemorySessionStore, SessionCache, SessionStore};
pub use stats::CacheStats;

// == Public Constants ==
/// Namespaced key under which the session cache mirrors its entries
pub const SESSION_STORAGE_KEY: &str = "cinescope.session";

// == Response Cache Trait ==
/// Common capability of both cache variants: a key-value store over
/// already-shaped response payloads.
///
/// Absence is a normal outcome, never an error; callers treat it as the
/// signal to fetch upstream and `set` the result themselves. The cache
/// never performs the fetch.
pub trait ResponseCache {
    /// Returns the stored payload if present and still valid.
    ///
    /// An entry found but no longer valid is removed as a side effect
    /// (lazy eviction); there is no background sweep.
    fn get(&mut self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, fully replacing any prior entry.
    fn set(&mut self, key: &str, value: Value);

    /// Returns whether `get(key)` would currently return a payload.
    ///
    /// Implemented in terms of [`get`](ResponseCache::get), so it shares
    /// the lazy-eviction side effect.
    fn has(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Empties the cache entirely.
    fn clear(&mut self);

    /// Returns the current number of entries.
    fn len(&self) -> usize;

    /// Returns true if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns current hit/miss statistics.
    fn stats(&self) -> CacheStats;
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_has_shares_lazy_eviction() {
        // A zero TTL makes every stored entry stale on the next read.
        let mut cache = TtlCache::new(Duration::from_secs(0));
        cache.set("trending", serde_json::json!([1, 2, 3]));
        assert_eq!(cache.len(), 1);

        std::thread::sleep(Duration::from_millis(5));

        // has goes through get, so the expired entry is purged here
        assert!(!cache.has("trending"));
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_is_empty_default() {
        let mut cache = TtlCache::new(Duration::from_secs(300));
        assert!(cache.is_empty());
        cache.set("popular", serde_json::json!({}));
        assert!(!cache.is_empty());
    }
}
