//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for the in-memory response cache
    pub cache_ttl_secs: u64,
    /// API key for the movie metadata service
    pub tmdb_api_key: String,
    /// Base URL of the movie metadata service
    pub tmdb_base_url: String,
    /// Base URL of the recommendation assistant backend
    pub assistant_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL_SECS` - In-memory cache TTL in seconds (default: 300)
    /// - `TMDB_API_KEY` - Metadata service API key (default: empty)
    /// - `TMDB_BASE_URL` - Metadata service base URL
    /// - `ASSISTANT_URL` - Recommendation assistant base URL
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            tmdb_api_key: env::var("TMDB_API_KEY").unwrap_or_default(),
            tmdb_base_url: env::var("TMDB_BASE_URL")
                .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string()),
            assistant_url: env::var("ASSISTANT_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl_secs: 300,
            tmdb_api_key: String::new(),
            tmdb_base_url: "https://api.themoviedb.org/3".to_string(),
            assistant_url: "http://localhost:8000".to_string(),
        }
    }
}
