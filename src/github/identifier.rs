//! Repository Identifier Parsing
//!
//! Accepts either a full GitHub URL or a bare `owner/repo` shorthand and
//! normalizes both to an owner/repo pair.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BadgeError, Result};

// Full URL form: https://github.com/owner/repo[/...]
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://github\.com/([^/\s]+)/([^/\s]+)").expect("hard-coded pattern")
});

// Bare shorthand form: owner/repo
static SHORTHAND_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^/\s]+)/([^/\s]+)$").expect("hard-coded pattern"));

// == Repo Id ==
/// A resolved repository identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    // == Parse ==
    /// Parses a free-form identifier into an owner/repo pair.
    ///
    /// Trailing path segments stay out of the captures for the URL form;
    /// query strings and fragment markers are stripped from the repo portion
    /// in both forms.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if let Some(caps) = URL_PATTERN.captures(input) {
            return Ok(Self::normalized(&caps[1], &caps[2]));
        }

        if let Some(caps) = SHORTHAND_PATTERN.captures(input) {
            return Ok(Self::normalized(&caps[1], &caps[2]));
        }

        Err(BadgeError::InvalidFormat(
            "Invalid GitHub repository format. Please use either \"owner/repo\" or a full GitHub URL."
                .to_string(),
        ))
    }

    // Query strings and fragments cling to the repo capture
    fn normalized(owner: &str, repo: &str) -> Self {
        let repo = repo.split(['#', '?']).next().unwrap_or(repo);
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }
    }

    // == Api Url ==
    /// GitHub REST endpoint for this repository.
    pub fn api_url(&self) -> String {
        format!("https://api.github.com/repos/{}/{}", self.owner, self.repo)
    }
}
