//! API Handlers
//!
//! HTTP request handlers for the discovery API, including the
//! check-cache / fetch / store orchestration around both cache variants.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::warn;

use crate::assistant::AssistantClient;
use crate::cache::{MemorySessionStore, ResponseCache, SessionCache, TtlCache};
use crate::catalog::{FeaturedTitle, TmdbClient, VideoClip};
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    ChatRequest, ChatResponse, ClearResponse, HealthResponse, RecommendationsQuery,
    RecommendationsResponse, SearchQuery, StatsResponse, TitlesByIdsQuery,
};

// == Application State ==
/// Application state shared across all handlers.
///
/// Owns both cache variants explicitly rather than exposing them as
/// globals: the TTL cache holds volatile lookups (details, search), the
/// session cache holds the slow-moving home sections.
#[derive(Clone)]
pub struct AppState {
    /// TTL-bounded in-memory cache
    pub ttl_cache: Arc<RwLock<TtlCache>>,
    /// Session-durable cache
    pub session_cache: Arc<RwLock<SessionCache>>,
    /// Metadata service client
    pub catalog: TmdbClient,
    /// Recommendation assistant client
    pub assistant: AssistantClient,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(
        ttl_cache: TtlCache,
        session_cache: SessionCache,
        catalog: TmdbClient,
        assistant: AssistantClient,
    ) -> Self {
        Self {
            ttl_cache: Arc::new(RwLock::new(ttl_cache)),
            session_cache: Arc::new(RwLock::new(session_cache)),
            catalog,
            assistant,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TtlCache::new(Duration::from_secs(config.cache_ttl_secs)),
            SessionCache::new(Arc::new(MemorySessionStore::new())),
            TmdbClient::from_config(config),
            AssistantClient::from_config(config),
        )
    }
}

// == Cache Orchestration ==
/// Returns the cached payload under `key`, or runs `fetch`, stores the
/// shaped result, and returns it.
///
/// The result is stored only when the fetch succeeds, so a failed fetch
/// never poisons the cache. The write lock covers the eviction-causing
/// read as well as the store.
pub async fn fetch_with_cache<C, F, Fut, T>(
    cache: &Arc<RwLock<C>>,
    key: &str,
    fetch: F,
) -> Result<Value>
where
    C: ResponseCache,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
    T: Serialize,
{
    {
        let mut cache = cache.write().await;
        if let Some(hit) = cache.get(key) {
            return Ok(hit);
        }
    }

    let fetched = fetch().await?;
    let value = serde_json::to_value(fetched)?;

    cache.write().await.set(key, value.clone());
    Ok(value)
}

/// Serves one browse section through the cache; an upstream failure
/// degrades to an empty list instead of an error.
async fn cached_section<C, F, Fut, T>(cache: &Arc<RwLock<C>>, key: &str, fetch: F) -> Json<Value>
where
    C: ResponseCache,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
    T: Serialize,
{
    match fetch_with_cache(cache, key, fetch).await {
        Ok(value) => Json(value),
        Err(err) => {
            warn!("Section '{}' unavailable, serving empty list: {}", key, err);
            Json(Value::Array(Vec::new()))
        }
    }
}

// == Browse Section Handlers ==

/// Handler for GET /titles/trending
pub async fn trending_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.catalog.clone();
    cached_section(&state.session_cache, "trending", move || async move {
        catalog.trending().await
    })
    .await
}

/// Handler for GET /titles/popular
pub async fn popular_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.catalog.clone();
    cached_section(&state.session_cache, "popular", move || async move {
        catalog.popular().await
    })
    .await
}

/// Handler for GET /titles/top-rated
pub async fn top_rated_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.catalog.clone();
    cached_section(&state.session_cache, "topRated", move || async move {
        catalog.top_rated().await
    })
    .await
}

/// Handler for GET /tv/popular
pub async fn tv_popular_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.catalog.clone();
    cached_section(&state.session_cache, "tvShows", move || async move {
        catalog.tv_popular().await
    })
    .await
}

/// Handler for GET /tv/top-rated
pub async fn tv_top_rated_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.catalog.clone();
    cached_section(&state.session_cache, "recommendedTVShows", move || async move {
        catalog.tv_top_rated().await
    })
    .await
}

/// Handler for GET /titles/hero
///
/// The carousel merges four parallel fetches and drops failures. A fully
/// empty carousel counts as an upstream failure so it is never cached.
pub async fn hero_handler(State(state): State<AppState>) -> Json<Value> {
    let catalog = state.catalog.clone();
    cached_section(&state.session_cache, "heroMovies", move || async move {
        let heroes = catalog.hero().await;
        if heroes.is_empty() {
            return Err(AppError::Upstream("no hero titles loaded".to_string()));
        }
        Ok(heroes)
    })
    .await
}

/// Handler for GET /titles/by-ids?ids=550,155
///
/// Resolves a recommendation or chat ID list into renderable cards.
/// Failures are dropped per title, so this never errors; results are
/// not cached since the ID lists vary per visitor.
pub async fn titles_by_ids_handler(
    State(state): State<AppState>,
    Query(params): Query<TitlesByIdsQuery>,
) -> Json<Vec<FeaturedTitle>> {
    let titles = state.catalog.movies_by_ids(&params.parse_ids()).await;
    Json(titles)
}

// == Detail and Search Handlers ==

/// Handler for GET /movies/:id
pub async fn movie_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>> {
    let catalog = state.catalog.clone();
    let key = format!("movie:{id}");
    let value = fetch_with_cache(&state.ttl_cache, &key, move || async move {
        catalog.movie_detail(id).await
    })
    .await?;

    Ok(Json(value))
}

/// Handler for GET /tv/:id
pub async fn tv_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>> {
    let catalog = state.catalog.clone();
    let key = format!("tv:{id}");
    let value = fetch_with_cache(&state.ttl_cache, &key, move || async move {
        catalog.tv_detail(id).await
    })
    .await?;

    Ok(Json(value))
}

/// Handler for GET /movies/:id/videos
///
/// An upstream failure degrades to an empty trailer list.
pub async fn movie_videos_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<Vec<VideoClip>> {
    match state.catalog.videos(id).await {
        Ok(trailers) => Json(trailers),
        Err(err) => {
            warn!("Videos for movie {} unavailable, serving empty list: {}", id, err);
            Json(Vec::new())
        }
    }
}

/// Handler for GET /search?query=...
///
/// A blank query short-circuits to an empty result set without touching
/// the upstream.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Value>> {
    let query = params.query.trim().to_string();
    if query.is_empty() {
        return Ok(Json(json!({ "results": [] })));
    }

    let catalog = state.catalog.clone();
    let key = format!("search:{query}");
    let results = fetch_with_cache(&state.ttl_cache, &key, move || async move {
        catalog.search(&query).await
    })
    .await?;

    Ok(Json(json!({ "results": results })))
}

// == Assistant Handlers ==

/// Handler for POST /chat
///
/// The assistant client owns the fallback, so this never fails upstream;
/// only an empty message is rejected.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let reply = state.assistant.chat(&req.message).await;
    Ok(Json(reply))
}

/// Handler for GET /recommendations
pub async fn recommendations_handler(
    State(state): State<AppState>,
    Query(params): Query<RecommendationsQuery>,
) -> Json<RecommendationsResponse> {
    let recs = state
        .assistant
        .recommendations(params.user_id.as_deref(), params.movie_id)
        .await;
    Json(recs)
}

// == Operational Handlers ==

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let memory = state.ttl_cache.read().await.stats();
    let session = state.session_cache.read().await.stats();

    Json(StatsResponse::new(&memory, &session))
}

/// Handler for DELETE /cache
///
/// Explicit end-of-session clear of both caches, including the session
/// cache's backing store entry.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.ttl_cache.write().await.clear();
    state.session_cache.write().await.clear();

    Json(ClearResponse::new())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
