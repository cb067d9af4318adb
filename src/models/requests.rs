//! Request DTOs for the badge server API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query parameters for `GET /generate`.
///
/// # Fields
/// - `url`: Repository identifier, either a full GitHub URL or `owner/repo`
/// - `note`: Optional caption rendered above the star count
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateQuery {
    /// Repository identifier; absence is a client error
    pub url: Option<String>,
    /// Optional caption, passed through verbatim to the renderer
    #[serde(default)]
    pub note: Option<String>,
}

/// Query parameters for `GET /:owner/:repo`.
#[derive(Debug, Clone, Deserialize)]
pub struct BadgeQuery {
    /// Optional caption, passed through verbatim to the renderer
    #[serde(default)]
    pub note: Option<String>,
}
