//! Cinescope - a movie and TV discovery backend
//!
//! Serves shaped catalog data with a two-tier response cache and a
//! recommendation assistant with local fallbacks.

pub mod api;
pub mod assistant;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use config::Config;
