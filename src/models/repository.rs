//! Repository Metadata
//!
//! The normalized record returned by the GitHub fetcher. Created once per
//! request and never mutated; only images derived from it are cached.

use serde::Deserialize;

/// Normalized GitHub repository record.
///
/// Field names map directly onto the GitHub REST API payload
/// (`GET /repos/{owner}/{repo}`).
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryMetadata {
    /// Short repository name
    pub name: String,
    /// `owner/repo`, used as the cache-key component and on-image label
    #[serde(rename = "full_name")]
    pub full_name: String,
    /// Star count, never negative
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    /// Web URL of the repository (informational, not rendered)
    #[serde(rename = "html_url")]
    pub url: String,
    /// Repository description; carried for future use, unused by the renderer
    pub description: Option<String>,
}
