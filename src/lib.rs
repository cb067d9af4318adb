//! mkstar - GitHub star celebration badge server
//!
//! Fetches a repository's star count from the GitHub API and renders a
//! shareable badge image, backed by a bounded in-memory image cache.

pub mod api;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod render;

pub use api::AppState;
pub use config::Config;
