//! Assistant Module
//!
//! Forwards chat and recommendation requests to the external recommendation
//! backend. Any failure degrades to the local fallback tables; callers never
//! see an assistant error.

mod fallback;

use reqwest::Client;
use serde_json::json;
use tracing::warn;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{ChatResponse, RecommendationsResponse};

pub use fallback::{fallback_recommendations, fallback_reply, FALLBACK_RECOMMENDATION_IDS};

// == Assistant Client ==
/// Client for the recommendation assistant backend.
#[derive(Debug, Clone)]
pub struct AssistantClient {
    http: Client,
    base_url: String,
}

impl AssistantClient {
    // == Constructors ==
    /// Creates a client against the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Creates a client from server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.assistant_url.clone())
    }

    // == Chat ==
    /// Sends a chat message to the backend; on failure, answers from the
    /// keyword-matched fallback table.
    pub async fn chat(&self, message: &str) -> ChatResponse {
        match self.try_chat(message).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!("Assistant chat unavailable, using fallback: {}", err);
                fallback_reply(message)
            }
        }
    }

    async fn try_chat(&self, message: &str) -> Result<ChatResponse> {
        let response = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&json!({ "message": message }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "assistant chat returned {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    // == Recommendations ==
    /// Requests personalized recommendations; on failure, serves the static
    /// fallback list.
    pub async fn recommendations(
        &self,
        user_id: Option<&str>,
        movie_id: Option<u64>,
    ) -> RecommendationsResponse {
        match self.try_recommendations(user_id, movie_id).await {
            Ok(recs) => recs,
            Err(err) => {
                warn!("Recommendation backend unavailable, using fallback: {}", err);
                fallback_recommendations()
            }
        }
    }

    async fn try_recommendations(
        &self,
        user_id: Option<&str>,
        movie_id: Option<u64>,
    ) -> Result<RecommendationsResponse> {
        let response = self
            .http
            .post(format!("{}/recommendations", self.base_url))
            .json(&json!({ "userId": user_id, "movieId": movie_id }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "assistant recommendations returned {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}
