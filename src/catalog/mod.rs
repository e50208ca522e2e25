//! Catalog Module
//!
//! Client and payload shaping for the third-party movie metadata service.
//!
//! Raw upstream results are shaped into compact card payloads before they
//! reach the cache or a caller; nothing downstream sees the upstream schema.

pub mod client;
pub mod shape;

pub use client::TmdbClient;
pub use shape::{
    CastMember, CrewMember, FeaturedTitle, TitleCard, TitleDetail, VideoClip, HERO_MOVIE_IDS,
};
