//! Local Fallback Data
//!
//! Hard-coded replies served when the recommendation backend is unreachable.

use crate::models::{ChatResponse, RecommendationsResponse};

// == Fallback Tables ==
/// Default recommendation IDs when the backend is unavailable
pub const FALLBACK_RECOMMENDATION_IDS: [u64; 8] = [550, 155, 13, 24428, 11, 120, 637, 105];

/// Fight Club, The Dark Knight, Forrest Gump, The Avengers
const ACTION_PICKS: [u64; 4] = [550, 155, 13, 24428];

/// Back to the Future, The Mask, The Lord of the Rings, Star Wars
const COMEDY_PICKS: [u64; 4] = [105, 637, 120, 11];

// == Fallback Builders ==
/// Builds the fallback recommendation list.
pub fn fallback_recommendations() -> RecommendationsResponse {
    RecommendationsResponse {
        movie_ids: FALLBACK_RECOMMENDATION_IDS.to_vec(),
    }
}

/// Matches the message against the keyword table and builds a canned reply.
pub fn fallback_reply(message: &str) -> ChatResponse {
    let lower = message.to_lowercase();

    if lower.contains("action") || lower.contains("adventure") {
        ChatResponse {
            text: "Here are some great action movies I recommend:".to_string(),
            movie_ids: ACTION_PICKS.to_vec(),
        }
    } else if lower.contains("comedy") {
        ChatResponse {
            text: "Here are some hilarious comedies:".to_string(),
            movie_ids: COMEDY_PICKS.to_vec(),
        }
    } else {
        ChatResponse {
            text: "I'm here to help you discover great movies! Try asking me about \
                   action movies, comedies, or any specific genre you're interested in."
                .to_string(),
            movie_ids: Vec::new(),
        }
    }
}
