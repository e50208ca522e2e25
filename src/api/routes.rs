//! API Routes
//!
//! Configures the Axum router with all discovery API endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    chat_handler, clear_cache_handler, health_handler, hero_handler, movie_detail_handler,
    movie_videos_handler, popular_handler, recommendations_handler, search_handler, stats_handler,
    titles_by_ids_handler, top_rated_handler, trending_handler, tv_detail_handler,
    tv_popular_handler, tv_top_rated_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /titles/trending` - Trending movies
/// - `GET /titles/popular` - Popular movies
/// - `GET /titles/top-rated` - Top-rated movies
/// - `GET /titles/hero` - Hero carousel
/// - `GET /titles/by-ids` - Resolve an ID list into featured cards
/// - `GET /tv/popular` - Popular TV shows
/// - `GET /tv/top-rated` - Top-rated TV shows
/// - `GET /movies/:id` - Movie details
/// - `GET /movies/:id/videos` - YouTube trailers for a movie
/// - `GET /tv/:id` - TV show details
/// - `GET /search` - Multi search
/// - `GET /recommendations` - Personalized recommendations
/// - `POST /chat` - Recommendation assistant chat
/// - `GET /stats` - Cache statistics
/// - `DELETE /cache` - Clear both caches
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/titles/trending", get(trending_handler))
        .route("/titles/popular", get(popular_handler))
        .route("/titles/top-rated", get(top_rated_handler))
        .route("/titles/hero", get(hero_handler))
        .route("/titles/by-ids", get(titles_by_ids_handler))
        .route("/tv/popular", get(tv_popular_handler))
        .route("/tv/top-rated", get(tv_top_rated_handler))
        .route("/movies/:id", get(movie_detail_handler))
        .route("/movies/:id/videos", get(movie_videos_handler))
        .route("/tv/:id", get(tv_detail_handler))
        .route("/search", get(search_handler))
        .route("/recommendations", get(recommendations_handler))
        .route("/chat", post(chat_handler))
        .route("/stats", get(stats_handler))
        .route("/cache", delete(clear_cache_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
