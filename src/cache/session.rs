//! Session-Durable Cache
//!
//! No-TTL variant of the response cache. Entries stay valid until an
//! explicit clear; the whole map is mirrored into a session-scoped text
//! store so it survives rapid cache reconstruction within one session.
//!
//! The missing expiry is intentional: this variant holds the slow-moving
//! home sections, while the TTL variant holds volatile lookups. The two
//! policies stay distinct rather than unified.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::warn;

use crate::cache::{CacheStats, ResponseCache, SESSION_STORAGE_KEY};

// == Session Store Trait ==
/// A session-scoped text key-value store.
///
/// Lives only as long as the session; expected to be cleared when the
/// session ends. The session cache mirrors its entire map into this store
/// under a single namespaced key.
pub trait SessionStore: Send + Sync {
    /// Returns the stored text under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any prior text.
    fn set(&self, key: &str, value: String);

    /// Removes `key` from the store.
    fn remove(&self, key: &str);
}

// == In-Process Session Store ==
/// Session store backed by a shared in-process map.
///
/// Cloning shares the underlying storage, so a cache reconstructed against
/// a clone sees the entries the previous cache instance persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    /// Creates an empty session store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().expect("session store lock poisoned");
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut entries = self.entries.lock().expect("session store lock poisoned");
        entries.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().expect("session store lock poisoned");
        entries.remove(key);
    }
}

// == Session Cache ==
/// Durable response cache without expiry.
///
/// The in-memory map is loaded once from the backing store at construction
/// and rewritten synchronously on every `set`. Persistence is best-effort:
/// a payload that fails to serialize is logged and kept in memory only.
pub struct SessionCache {
    /// Key-value storage
    entries: HashMap<String, Value>,
    /// Session-scoped mirror of `entries`
    store: Arc<dyn SessionStore>,
    /// Hit/miss statistics
    stats: CacheStats,
}

impl SessionCache {
    // == Constructor ==
    /// Creates a SessionCache over the given backing store, loading any
    /// entries a previous instance persisted during this session.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let entries = match store.get(SESSION_STORAGE_KEY) {
            Some(text) => match serde_json::from_str::<HashMap<String, Value>>(&text) {
                Ok(loaded) => loaded,
                Err(err) => {
                    warn!("Failed to load session cache from storage: {}", err);
                    HashMap::new()
                }
            },
            None => HashMap::new(),
        };

        Self {
            entries,
            store,
            stats: CacheStats::new(),
        }
    }

    // == Persist ==
    /// Mirrors the current map into the backing store.
    fn save_to_store(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(text) => self.store.set(SESSION_STORAGE_KEY, text),
            Err(err) => {
                // Keep serving the in-memory value; durability is best-effort
                warn!("Failed to persist session cache: {}", err);
            }
        }
    }
}

impl ResponseCache for SessionCache {
    // == Get ==
    /// Returns the payload under `key`. Entries never expire; absence only
    /// occurs before the first `set` or after a `clear`.
    fn get(&mut self, key: &str) -> Option<Value> {
        match self.entries.get(key) {
            Some(value) => {
                let value = value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key` and synchronously refreshes the mirror.
    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
        self.stats.set_total_entries(self.entries.len());
        self.save_to_store();
    }

    // == Clear ==
    /// Empties the map and removes the backing store's namespaced key.
    fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
        self.store.remove(SESSION_STORAGE_KEY);
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

    fn cache_with_store() -> (SessionCache, MemorySessionStore) {
        let store = MemorySessionStore::new();
        let cache = SessionCache::new(Arc::new(store.clone()));
        (cache, store)
    }

    #[test]
    fn test_set_and_get() {
        let (mut cache, _store) = cache_with_store();

        cache.set("trending", json!([{"id": 872585}]));

        assert_eq!(cache.get("trending"), Some(json!([{"id": 872585}])));
        assert!(cache.has("trending"));
    }

    #[test]
    fn test_entries_never_expire() {
        let (mut cache, _store) = cache_with_store();

        cache.set("topRated", json!("stays"));
        std::thread::sleep(std::time::Duration::from_millis(50));

        assert_eq!(cache.get("topRated"), Some(json!("stays")));
    }

    #[test]
    fn test_set_mirrors_to_store() {
        let (mut cache, store) = cache_with_store();

        cache.set("popular", json!([1, 2]));

        let mirrored = store.get(SESSION_STORAGE_KEY).unwrap();
        let map: HashMap<String, Value> = serde_json::from_str(&mirrored).unwrap();
        assert_eq!(map.get("popular"), Some(&json!([1, 2])));
    }

    #[test]
    fn test_reconstruction_round_trip() {
        let store = MemorySessionStore::new();

        {
            let mut cache = SessionCache::new(Arc::new(store.clone()));
            cache.set("tvShows", json!([{"id": 1399, "type": "tv"}]));
        }

        // Simulates a rapid reload within the same session
        let mut reloaded = SessionCache::new(Arc::new(store));
        assert_eq!(
            reloaded.get("tvShows"),
            Some(json!([{"id": 1399, "type": "tv"}]))
        );
    }

    #[test]
    fn test_clear_removes_backing_key() {
        let (mut cache, store) = cache_with_store();

        cache.set("heroMovies", json!([155]));
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.get("heroMovies"), None);
        assert!(store.get(SESSION_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_corrupt_mirror_starts_empty() {
        let store = MemorySessionStore::new();
        store.set(SESSION_STORAGE_KEY, "not json".to_string());

        let mut cache = SessionCache::new(Arc::new(store));
        assert!(cache.is_empty());
        assert_eq!(cache.get("anything"), None);
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let (mut cache, _store) = cache_with_store();

        cache.set("trending", json!([]));
        cache.get("trending"); // hit
        cache.get("cold"); // miss

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
