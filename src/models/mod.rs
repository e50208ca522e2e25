//! Request and Response models for the discovery API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ChatRequest, RecommendationsQuery, SearchQuery, TitlesByIdsQuery};
pub use responses::{
    CacheSummary, ChatResponse, ClearResponse, ErrorResponse, HealthResponse,
    RecommendationsResponse, StatsResponse,
};
