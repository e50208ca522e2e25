//! Metadata Service Client
//!
//! Thin reqwest client for the movie metadata API. Every method returns
//! already-shaped payloads; raw upstream responses never leave this module.

use reqwest::Client;

use crate::catalog::shape::{
    self, FeaturedTitle, RawCredits, RawKeywords, RawPage, RawTitle, RawVideoPage, TitleCard,
    TitleDetail, VideoClip, HERO_MOVIE_IDS,
};
use crate::config::Config;
use crate::error::{AppError, Result};

// == TMDB Client ==
/// Client for the movie metadata service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    // == Constructors ==
    /// Creates a client against the given base URL with the given API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Creates a client from server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tmdb_base_url.clone(), config.tmdb_api_key.clone())
    }

    // == Raw Fetch ==
    /// Fetches and deserializes one upstream resource.
    async fn fetch<T>(&self, path: &str, extra_query: &[(&str, &str)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(extra_query)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(AppError::Upstream(format!("{} returned {}", path, status)));
        }

        Ok(response.json().await?)
    }

    async fn fetch_page(&self, path: &str) -> Result<Vec<RawTitle>> {
        let page: RawPage = self.fetch(path, &[]).await?;
        Ok(page.results)
    }

    // == Movie Sections ==
    /// Trending movies of the day.
    pub async fn trending(&self) -> Result<Vec<TitleCard>> {
        let results = self.fetch_page("trending/movie/day").await?;
        Ok(results.iter().map(shape::shape_movie).collect())
    }

    /// Popular movies.
    pub async fn popular(&self) -> Result<Vec<TitleCard>> {
        let results = self.fetch_page("movie/popular").await?;
        Ok(results.iter().map(shape::shape_movie).collect())
    }

    /// Top-rated movies.
    pub async fn top_rated(&self) -> Result<Vec<TitleCard>> {
        let results = self.fetch_page("movie/top_rated").await?;
        Ok(results.iter().map(shape::shape_movie).collect())
    }

    // == TV Sections ==
    /// Popular TV shows.
    pub async fn tv_popular(&self) -> Result<Vec<TitleCard>> {
        let results = self.fetch_page("tv/popular").await?;
        Ok(results.iter().map(shape::shape_tv).collect())
    }

    /// Top-rated TV shows, limited to the fifteen the recommended rail shows.
    pub async fn tv_top_rated(&self) -> Result<Vec<TitleCard>> {
        let results = self.fetch_page("tv/top_rated").await?;
        Ok(results.iter().take(15).map(shape::shape_tv).collect())
    }

    // == Featured Titles ==
    /// Resolves a list of movie IDs into featured cards, fetching in
    /// parallel and dropping any title that fails to load. The caller's
    /// ordering is preserved.
    pub async fn movies_by_ids(&self, ids: &[u64]) -> Vec<FeaturedTitle> {
        if ids.is_empty() {
            return Vec::new();
        }

        let mut fetches = tokio::task::JoinSet::new();
        for &id in ids {
            let client = self.clone();
            fetches.spawn(async move { (id, client.fetch_movie_raw(id).await) });
        }

        let mut by_id = std::collections::HashMap::new();
        while let Some(joined) = fetches.join_next().await {
            if let Ok((id, Ok(raw))) = joined {
                by_id.insert(id, shape::shape_featured(&raw));
            }
        }

        ids.iter().filter_map(|id| by_id.remove(id)).collect()
    }

    /// Fetches the fixed hero carousel.
    pub async fn hero(&self) -> Vec<FeaturedTitle> {
        self.movies_by_ids(&HERO_MOVIE_IDS).await
    }

    async fn fetch_movie_raw(&self, id: u64) -> Result<RawTitle> {
        self.fetch(&format!("movie/{id}"), &[]).await
    }

    // == Details ==
    /// Full movie details merged from the detail, credits and keywords
    /// resources, fetched in parallel. Credits and keywords degrade to
    /// empty when their fetch fails; the detail itself is required.
    pub async fn movie_detail(&self, id: u64) -> Result<TitleDetail> {
        let credits_path = format!("movie/{id}/credits");
        let keywords_path = format!("movie/{id}/keywords");
        let (detail, credits, keywords) = tokio::join!(
            self.fetch_movie_raw(id),
            self.fetch::<RawCredits>(&credits_path, &[]),
            self.fetch::<RawKeywords>(&keywords_path, &[]),
        );

        let raw = detail?;
        let credits = credits.unwrap_or_default();
        let keywords = keywords.unwrap_or_default();

        Ok(shape::shape_detail(&raw, &credits, &keywords))
    }

    /// Full TV show details with credits; TV has no keywords resource here.
    pub async fn tv_detail(&self, id: u64) -> Result<TitleDetail> {
        let detail_path = format!("tv/{id}");
        let credits_path = format!("tv/{id}/credits");
        let (detail, credits) = tokio::join!(
            self.fetch::<RawTitle>(&detail_path, &[]),
            self.fetch::<RawCredits>(&credits_path, &[]),
        );

        let raw = detail?;
        let credits = credits.unwrap_or_default();

        Ok(shape::shape_detail(&raw, &credits, &RawKeywords::default()))
    }

    // == Videos ==
    /// YouTube trailers for one movie.
    pub async fn videos(&self, id: u64) -> Result<Vec<VideoClip>> {
        let page: RawVideoPage = self.fetch(&format!("movie/{id}/videos"), &[]).await?;
        Ok(shape::shape_trailers(&page))
    }

    // == Search ==
    /// Multi search across movies and TV, filtered down to results with
    /// enough data to display.
    pub async fn search(&self, query: &str) -> Result<Vec<TitleCard>> {
        let page: RawPage = self.fetch("search/multi", &[("query", query)]).await?;

        Ok(page
            .results
            .iter()
            .filter(|raw| shape::is_displayable_search_result(raw))
            .map(|raw| match raw.media_type.as_deref() {
                Some("tv") => shape::shape_tv(raw),
                _ => shape::shape_movie(raw),
            })
            .collect())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = TmdbClient::new("https://api.themoviedb.org/3", "key");
        assert_eq!(client.base_url, "https://api.themoviedb.org/3");
        assert_eq!(client.api_key, "key");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_an_error() {
        // Nothing listens on the discard port
        let client = TmdbClient::new("http://127.0.0.1:9", "key");

        let result = client.trending().await;
        assert!(matches!(result, Err(AppError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_hero_drops_failures() {
        let client = TmdbClient::new("http://127.0.0.1:9", "key");

        // All four fetches fail, so the carousel merges to empty
        let heroes = client.hero().await;
        assert!(heroes.is_empty());
    }

    #[tokio::test]
    async fn test_movies_by_ids_empty_input() {
        let client = TmdbClient::new("http://127.0.0.1:9", "key");

        // No IDs means no fetches at all
        let resolved = client.movies_by_ids(&[]).await;
        assert!(resolved.is_empty());
    }
}
