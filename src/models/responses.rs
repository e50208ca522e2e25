//! Response DTOs for the discovery API
//!
//! Defines the structure of outgoing HTTP response bodies. Payload fields
//! are camelCase to match the client-facing API surface.

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;

/// Response body for the chat endpoint (POST /chat)
///
/// Also deserialized from the assistant backend, whose replies may omit
/// the movie list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// The assistant's reply text
    pub text: String,
    /// Titles the reply refers to, if any
    #[serde(default)]
    pub movie_ids: Vec<u64>,
}

/// Response body for the recommendations endpoint (GET /recommendations)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    /// Recommended title IDs
    #[serde(default)]
    pub movie_ids: Vec<u64>,
}

/// Per-cache statistics summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheSummary {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<&CacheStats> for CacheSummary {
    fn from(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// The TTL-bounded in-memory cache
    pub memory: CacheSummary,
    /// The session-durable cache
    pub session: CacheSummary,
}

impl StatsResponse {
    /// Creates a new StatsResponse from both caches' statistics
    pub fn new(memory: &CacheStats, session: &CacheStats) -> Self {
        Self {
            memory: memory.into(),
            session: session.into(),
        }
    }
}

/// Response body for the cache clear endpoint (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Confirmation message
    pub message: String,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new() -> Self {
        Self {
            message: "Caches cleared".to_string(),
        }
    }
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_serializes_camel_case() {
        let resp = ChatResponse {
            text: "Here you go".to_string(),
            movie_ids: vec![550],
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("movieIds"));
        assert!(json.contains("550"));
    }

    #[test]
    fn test_chat_response_missing_ids_defaults_empty() {
        let resp: ChatResponse = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert!(resp.movie_ids.is_empty());
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let mut memory = CacheStats::new();
        memory.record_hit();
        memory.record_hit();
        memory.record_miss();
        let session = CacheStats::new();

        let resp = StatsResponse::new(&memory, &session);
        assert!((resp.memory.hit_rate - 2.0 / 3.0).abs() < 0.001);
        assert_eq!(resp.session.hit_rate, 0.0);
    }

    #[test]
    fn test_cache_summary_serializes_camel_case() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.set_total_entries(3);

        let json = serde_json::to_value(CacheSummary::from(&stats)).unwrap();
        assert_eq!(json["totalEntries"], serde_json::json!(3));
        assert_eq!(json["hitRate"], serde_json::json!(1.0));
        assert!(json.get("total_entries").is_none());
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
