//! API Module
//!
//! HTTP handlers and routing for the discovery API.
//!
//! # Endpoints
//! - `GET /titles/*` - Movie browse sections and hero carousel
//! - `GET /tv/*` - TV browse sections and details
//! - `GET /movies/:id` - Movie details
//! - `GET /search` - Multi search
//! - `GET /recommendations`, `POST /chat` - Assistant with local fallback
//! - `GET /stats`, `DELETE /cache`, `GET /health` - Operational endpoints

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
