//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with their write timestamp.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

// == Cache Entry ==
/// A single cached payload together with the time it was written.
///
/// Entries are never mutated in place; a `set` on an existing key replaces
/// both the value and the timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The stored payload, already shaped for the caller
    pub value: Value,
    /// Write timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            stored_at: current_timestamp_ms(),
        }
    }

    // == Is Fresh ==
    /// Checks whether the entry is still valid under the given TTL.
    ///
    /// An entry is valid if and only if `now - stored_at <= ttl`; it becomes
    /// stale the moment the TTL has fully elapsed.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        let age_ms = current_timestamp_ms().saturating_sub(self.stored_at);
        age_ms <= ttl.as_millis() as u64
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.stored_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
