//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of rendered images the cache can hold
    pub cache_capacity: usize,
    /// Optional GitHub bearer token for a higher API rate limit
    pub github_token: Option<String>,
    /// Directory holding the static landing page assets
    pub public_dir: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5005)
    /// - `CACHE_CAPACITY` - Maximum cached images (default: 100)
    /// - `GITHUB_TOKEN` - Optional GitHub token; anonymous requests are valid
    /// - `PUBLIC_DIR` - Static asset directory (default: "public")
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5005),
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|v| !v.is_empty()),
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5005,
            cache_capacity: 100,
            github_token: None,
            public_dir: "public".to_string(),
        }
    }
}
