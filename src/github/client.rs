//! GitHub API Client
//!
//! Fetches repository metadata over the GitHub REST API with an optional
//! bearer token. Anonymous requests are valid and simply carry GitHub's
//! lower unauthenticated rate limit.

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use tracing::debug;

use crate::error::{BadgeError, Result};
use crate::github::identifier::RepoId;
use crate::models::RepositoryMetadata;

/// Timeout applied to upstream GitHub calls; surfaced as a transport error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// == GitHub Client ==
/// Thin client over `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    token: Option<String>,
}

impl GithubClient {
    // == Constructor ==
    /// Creates a client with a descriptive user agent and request timeout.
    pub fn new(token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("mkstar/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| BadgeError::Transport(err.to_string()))?;

        Ok(Self { http, token })
    }

    // == Fetch ==
    /// Fetches normalized metadata for a free-form repository identifier.
    ///
    /// Upstream 404 maps to `NotFound`, 403 to `RateLimited`; any other
    /// network or protocol failure becomes `Transport` with the upstream
    /// message. One pass, no retries.
    pub async fn fetch_repo(&self, identifier: &str) -> Result<RepositoryMetadata> {
        let id = RepoId::parse(identifier)?;
        debug!(owner = %id.owner, repo = %id.repo, "fetching repository metadata");

        let mut request = self
            .http
            .get(id.api_url())
            .header(header::ACCEPT, "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| BadgeError::Transport(err.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(BadgeError::NotFound),
            StatusCode::FORBIDDEN => Err(BadgeError::RateLimited),
            status if status.is_success() => response
                .json::<RepositoryMetadata>()
                .await
                .map_err(|err| BadgeError::Transport(err.to_string())),
            status => Err(BadgeError::Transport(format!(
                "unexpected status {status} from GitHub"
            ))),
        }
    }
}
