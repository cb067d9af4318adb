//! GitHub Fetcher Module
//!
//! Resolves free-form repository identifiers and fetches normalized
//! repository metadata from the GitHub REST API.

mod client;
mod identifier;

pub use client::GithubClient;
pub use identifier::RepoId;
