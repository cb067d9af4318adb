//! API Routes
//!
//! Configures the Axum router with all badge server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::handlers::{
    generate_handler, health_handler, repo_badge_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /generate?url=&note=` - Render a badge for an explicit identifier
/// - `GET /:owner/:repo?note=` - Render a badge for a path-form identifier
/// - `GET /stats` - Image cache statistics
/// - `GET /health` - Health check endpoint
/// - `GET /` - Static landing page, assets under `/public`
///
/// Static segments win over the `/:owner/:repo` capture, so `/generate`,
/// `/stats`, and `/health` are never mistaken for repositories.
///
/// # Middleware
/// - CORS: Allows any origin (badges embed on arbitrary pages)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState, public_dir: &str) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/generate", get(generate_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/:owner/:repo", get(repo_badge_handler))
        .route_service("/", ServeFile::new(format!("{public_dir}/index.html")))
        .nest_service("/public", ServeDir::new(public_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
