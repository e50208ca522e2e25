//! Request DTOs for the discovery API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Request body for the chat endpoint (POST /chat)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The visitor's message to the assistant
    pub message: String,
}

impl ChatRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.message.trim().is_empty() {
            return Some("Message cannot be empty".to_string());
        }
        None
    }
}

/// Query string for the recommendations endpoint (GET /recommendations)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsQuery {
    /// Visitor identity for personalization
    #[serde(default)]
    pub user_id: Option<String>,
    /// Anchor title for related-title recommendations
    #[serde(default)]
    pub movie_id: Option<u64>,
}

/// Query string for the search endpoint (GET /search)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Free-text search query
    #[serde(default)]
    pub query: String,
}

/// Query string for the featured-title resolution endpoint (GET /titles/by-ids)
#[derive(Debug, Clone, Deserialize)]
pub struct TitlesByIdsQuery {
    /// Comma-separated movie IDs
    #[serde(default)]
    pub ids: String,
}

impl TitlesByIdsQuery {
    /// Parses the comma-separated ID list, skipping blank or malformed parts.
    pub fn parse_ids(&self) -> Vec<u64> {
        self.ids
            .split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_deserialize() {
        let json = r#"{"message": "recommend a comedy"}"#;
        let req: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.message, "recommend a comedy");
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_validate_blank_message() {
        let req = ChatRequest {
            message: "   ".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_recommendations_query_camel_case() {
        let query: RecommendationsQuery =
            serde_json::from_str(r#"{"userId": "u1", "movieId": 155}"#).unwrap();
        assert_eq!(query.user_id.as_deref(), Some("u1"));
        assert_eq!(query.movie_id, Some(155));
    }

    #[test]
    fn test_recommendations_query_defaults() {
        let query: RecommendationsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.user_id.is_none());
        assert!(query.movie_id.is_none());
    }

    #[test]
    fn test_titles_by_ids_parsing() {
        let query = TitlesByIdsQuery {
            ids: "550, 155,abc,,13".to_string(),
        };
        assert_eq!(query.parse_ids(), vec![550, 155, 13]);

        let empty = TitlesByIdsQuery { ids: String::new() };
        assert!(empty.parse_ids().is_empty());
    }
}
