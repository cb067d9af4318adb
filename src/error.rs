//! Error types for the badge server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Badge Error Enum ==
/// Unified error type for the badge server.
#[derive(Error, Debug)]
pub enum BadgeError {
    /// Repository identifier is missing or matches neither accepted form
    #[error("{0}")]
    InvalidFormat(String),

    /// Upstream reported the repository as nonexistent (404)
    #[error("Repository not found")]
    NotFound,

    /// Upstream refused the request (403)
    #[error("GitHub API rate limit exceeded. Try again later or add a GitHub token.")]
    RateLimited,

    /// Network or protocol failure talking to the upstream API
    #[error("Error fetching repository data: {0}")]
    Transport(String),

    /// Image generation failed for a non-degradation reason
    #[error("Failed to generate image: {0}")]
    Render(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for BadgeError {
    fn into_response(self) -> Response {
        let status = match &self {
            BadgeError::InvalidFormat(_) => StatusCode::BAD_REQUEST,
            BadgeError::NotFound
            | BadgeError::RateLimited
            | BadgeError::Transport(_)
            | BadgeError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the badge server.
pub type Result<T> = std::result::Result<T, BadgeError>;
