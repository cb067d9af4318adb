//! API Handlers
//!
//! HTTP request handlers for each badge server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::config::Config;
use crate::error::{BadgeError, Result};
use crate::github::GithubClient;
use crate::models::{BadgeQuery, GenerateQuery, HealthResponse, StatsResponse};
use crate::render::{default_rasterizer, ImageRenderer};

/// Downstream caches may hold a badge for five minutes.
const CACHE_CONTROL_VALUE: &str = "public, max-age=300";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// GitHub metadata fetcher
    pub github: Arc<GithubClient>,
    /// Badge renderer with its internal image cache
    pub renderer: Arc<ImageRenderer>,
}

impl AppState {
    /// Creates a new AppState from the given collaborators.
    pub fn new(github: GithubClient, renderer: ImageRenderer) -> Self {
        Self {
            github: Arc::new(github),
            renderer: Arc::new(renderer),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// This is the composition root: the rasterization strategy compiled
    /// into the binary is wired here.
    pub fn from_config(config: &Config) -> Result<Self> {
        let github = GithubClient::new(config.github_token.clone())?;
        let renderer = ImageRenderer::new(config.cache_capacity, default_rasterizer());
        Ok(Self::new(github, renderer))
    }
}

/// Handler for GET /generate?url=&note=
///
/// Renders a badge for an explicit repository identifier. A missing `url`
/// parameter is a client error.
pub async fn generate_handler(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> Result<Response> {
    let url = query
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| BadgeError::InvalidFormat("GitHub URL is required".to_string()))?;
    let note = query.note.unwrap_or_default();

    badge_response(&state, &url, &note).await
}

/// Handler for GET /:owner/:repo?note=
///
/// Path-form shorthand; the identifier is synthesized as a full GitHub URL.
pub async fn repo_badge_handler(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
    Query(query): Query<BadgeQuery>,
) -> Result<Response> {
    let identifier = format!("https://github.com/{owner}/{repo}");
    let note = query.note.unwrap_or_default();

    badge_response(&state, &identifier, &note).await
}

// Fetch then render; shared by both entry points
async fn badge_response(state: &AppState, identifier: &str, note: &str) -> Result<Response> {
    let metadata = state.github.fetch_repo(identifier).await?;
    let image = state.renderer.render(&metadata, note).await;

    Ok((
        [
            (header::CONTENT_TYPE, image.mime.as_str()),
            (header::CACHE_CONTROL, CACHE_CONTROL_VALUE),
        ],
        image.bytes,
    )
        .into_response())
}

/// Handler for GET /stats
///
/// Returns current image cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.renderer.stats().await;

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
