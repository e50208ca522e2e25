//! Payload Shaping
//!
//! Converts raw metadata-service results into the compact payloads the
//! application serves and caches.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// == Public Constants ==
/// Fixed movie IDs for the hero carousel
pub const HERO_MOVIE_IDS: [u64; 4] = [
    155,    // The Dark Knight
    872585, // Oppenheimer
    1895,   // Star Wars: Episode III - Revenge of the Sith
    205596, // The Imitation Game
];

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/w1280";
const PROFILE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

const POSTER_PLACEHOLDER: &str = "/placeholder.svg?height=300&width=200";
const DETAIL_POSTER_PLACEHOLDER: &str = "/placeholder.svg?height=600&width=400";
const BACKDROP_PLACEHOLDER: &str = "/placeholder.svg?height=400&width=800";
const PROFILE_PLACEHOLDER: &str = "/placeholder.svg?height=200&width=150";

// == Raw Upstream Types ==
/// One raw list or detail result. The upstream uses different field names
/// for movies (`title`, `release_date`) and TV (`name`, `first_air_date`),
/// so everything is optional and shaping picks what applies.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTitle {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub genres: Vec<RawGenre>,
    #[serde(default)]
    pub media_type: Option<String>,
}

/// A named genre as it appears in detail responses
#[derive(Debug, Clone, Deserialize)]
pub struct RawGenre {
    pub id: u64,
    pub name: String,
}

/// A paged list response
#[derive(Debug, Clone, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub results: Vec<RawTitle>,
}

/// Cast and crew for one title
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCredits {
    #[serde(default)]
    pub cast: Vec<RawPerson>,
    #[serde(default)]
    pub crew: Vec<RawPerson>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPerson {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

/// Keyword list for one title
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawKeywords {
    #[serde(default)]
    pub keywords: Vec<RawKeyword>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawKeyword {
    pub name: String,
}

/// Video list for one title
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVideoPage {
    #[serde(default)]
    pub results: Vec<RawVideo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawVideo {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

// == Shaped Payloads ==
/// A compact card for browse sections and search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleCard {
    pub id: u64,
    pub title: String,
    pub release_date: String,
    /// Score on a 0-100 scale
    pub rating: u32,
    pub poster: String,
    pub backdrop: String,
    pub overview: String,
    pub genres: Vec<u64>,
    /// Present and `"tv"` for TV results
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A featured title, carrying genre names rather than IDs.
///
/// Serves both the hero carousel and the resolution of recommendation
/// ID lists into renderable cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedTitle {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub release_date: String,
    pub rating: u32,
    pub poster: String,
    pub backdrop: String,
    pub genres: Vec<String>,
}

/// The full detail payload for one title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDetail {
    pub id: u64,
    pub title: String,
    pub overview: String,
    pub tagline: String,
    pub release_date: String,
    /// Raw upstream average on a 0-10 scale
    pub rating: f64,
    pub runtime: u32,
    pub genres: Vec<String>,
    pub poster: String,
    pub backdrop: String,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: String,
    pub profile_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrewMember {
    pub id: u64,
    pub name: String,
    pub job: String,
    pub profile_path: String,
}

// == Shaping Functions ==
/// Formats an upstream `YYYY-MM-DD` date for display, or `"TBA"` when the
/// date is missing or unparseable.
fn format_release_date(raw: Option<&str>) -> String {
    raw.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .map(|date| date.format("%-d %b %Y").to_string())
        .unwrap_or_else(|| "TBA".to_string())
}

/// Converts the upstream 0-10 vote average to a 0-100 score.
fn rating_percent(vote_average: f64) -> u32 {
    (vote_average * 10.0).round() as u32
}

fn poster_url(path: Option<&str>, placeholder: &str) -> String {
    match path {
        Some(p) => format!("{}{}", POSTER_BASE_URL, p),
        None => placeholder.to_string(),
    }
}

fn backdrop_url(path: Option<&str>) -> String {
    match path {
        Some(p) => format!("{}{}", BACKDROP_BASE_URL, p),
        None => BACKDROP_PLACEHOLDER.to_string(),
    }
}

fn profile_url(path: Option<&str>) -> String {
    match path {
        Some(p) => format!("{}{}", PROFILE_BASE_URL, p),
        None => PROFILE_PLACEHOLDER.to_string(),
    }
}

/// Shapes a raw movie result into a card.
pub fn shape_movie(raw: &RawTitle) -> TitleCard {
    TitleCard {
        id: raw.id,
        title: raw.title.clone().unwrap_or_default(),
        release_date: format_release_date(raw.release_date.as_deref()),
        rating: rating_percent(raw.vote_average),
        poster: poster_url(raw.poster_path.as_deref(), POSTER_PLACEHOLDER),
        backdrop: backdrop_url(raw.backdrop_path.as_deref()),
        overview: raw.overview.clone().unwrap_or_default(),
        genres: raw.genre_ids.clone(),
        kind: None,
    }
}

/// Shapes a raw TV result into a card tagged as TV.
pub fn shape_tv(raw: &RawTitle) -> TitleCard {
    TitleCard {
        id: raw.id,
        title: raw.name.clone().unwrap_or_default(),
        release_date: format_release_date(raw.first_air_date.as_deref()),
        rating: rating_percent(raw.vote_average),
        poster: poster_url(raw.poster_path.as_deref(), POSTER_PLACEHOLDER),
        backdrop: backdrop_url(raw.backdrop_path.as_deref()),
        overview: raw.overview.clone().unwrap_or_default(),
        genres: raw.genre_ids.clone(),
        kind: Some("tv".to_string()),
    }
}

/// Shapes a raw detail result into a featured title.
pub fn shape_featured(raw: &RawTitle) -> FeaturedTitle {
    FeaturedTitle {
        id: raw.id,
        title: raw.title.clone().unwrap_or_default(),
        overview: raw.overview.clone().unwrap_or_default(),
        release_date: format_release_date(raw.release_date.as_deref()),
        rating: rating_percent(raw.vote_average),
        poster: poster_url(raw.poster_path.as_deref(), POSTER_PLACEHOLDER),
        backdrop: backdrop_url(raw.backdrop_path.as_deref()),
        genres: raw.genres.iter().map(|g| g.name.clone()).collect(),
    }
}

/// Merges a raw detail result with its credits and keywords.
///
/// Cast is limited to the top ten billed; crew is limited to directors,
/// writers and producers, five at most; keywords to the first ten.
pub fn shape_detail(raw: &RawTitle, credits: &RawCredits, keywords: &RawKeywords) -> TitleDetail {
    let cast = credits
        .cast
        .iter()
        .take(10)
        .map(|person| CastMember {
            id: person.id,
            name: person.name.clone(),
            character: person.character.clone().unwrap_or_default(),
            profile_path: profile_url(person.profile_path.as_deref()),
        })
        .collect();

    let crew = credits
        .crew
        .iter()
        .filter(|person| {
            matches!(
                person.job.as_deref(),
                Some("Director") | Some("Writer") | Some("Producer")
            )
        })
        .take(5)
        .map(|person| CrewMember {
            id: person.id,
            name: person.name.clone(),
            job: person.job.clone().unwrap_or_default(),
            profile_path: profile_url(person.profile_path.as_deref()),
        })
        .collect();

    TitleDetail {
        id: raw.id,
        title: raw.title.clone().or_else(|| raw.name.clone()).unwrap_or_default(),
        overview: raw.overview.clone().unwrap_or_default(),
        tagline: raw.tagline.clone().unwrap_or_default(),
        release_date: format_release_date(
            raw.release_date.as_deref().or(raw.first_air_date.as_deref()),
        ),
        rating: raw.vote_average,
        runtime: raw.runtime.unwrap_or(0),
        genres: raw.genres.iter().map(|g| g.name.clone()).collect(),
        poster: poster_url(raw.poster_path.as_deref(), DETAIL_POSTER_PLACEHOLDER),
        backdrop: backdrop_url(raw.backdrop_path.as_deref()),
        cast,
        crew,
        keywords: keywords
            .keywords
            .iter()
            .take(10)
            .map(|k| k.name.clone())
            .collect(),
    }
}

/// A playable trailer clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoClip {
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Keeps only YouTube trailers from a raw video list.
pub fn shape_trailers(page: &RawVideoPage) -> Vec<VideoClip> {
    page.results
        .iter()
        .filter(|video| {
            video.kind.as_deref() == Some("Trailer") && video.site.as_deref() == Some("YouTube")
        })
        .filter_map(|video| {
            Some(VideoClip {
                key: video.key.clone()?,
                name: video.name.clone().unwrap_or_default(),
                site: video.site.clone()?,
                kind: video.kind.clone()?,
            })
        })
        .collect()
}

/// Returns whether a search result carries enough data to display.
///
/// Only movie and TV results with a title and at least one image survive.
pub fn is_displayable_search_result(raw: &RawTitle) -> bool {
    let has_image = raw.poster_path.is_some() || raw.backdrop_path.is_some();
    match raw.media_type.as_deref() {
        Some("tv") => raw.name.is_some() && has_image,
        Some("movie") => raw.title.is_some() && has_image,
        _ => false,
    }
}
