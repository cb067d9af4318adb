//! API Module
//!
//! HTTP handlers and routing for the badge server.
//!
//! # Endpoints
//! - `GET /generate?url=&note=` - Render a badge for a repository identifier
//! - `GET /:owner/:repo?note=` - Render a badge for a path-form identifier
//! - `GET /stats` - Image cache statistics
//! - `GET /health` - Health check endpoint
//! - `GET /` and `/public/*` - Static landing page and assets

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
