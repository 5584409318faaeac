//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lifetime of a cached profile in seconds
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the reporting application serving `/api/profile`
    pub profile_api_url: String,
    /// Bearer token sent to the profile endpoint, if any
    pub profile_api_token: Option<String>,
    /// Timeout for a single upstream call in seconds
    pub profile_api_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Profile cache TTL in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PROFILE_API_URL` - Upstream base URL (default: http://localhost:3001)
    /// - `PROFILE_API_TOKEN` - Upstream bearer token (default: none)
    /// - `PROFILE_API_TIMEOUT_SECS` - Upstream timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: parse_var("CACHE_TTL_SECS").unwrap_or(defaults.cache_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            profile_api_url: env::var("PROFILE_API_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.profile_api_url),
            profile_api_token: env::var("PROFILE_API_TOKEN")
                .ok()
                .filter(|v| !v.is_empty()),
            profile_api_timeout: parse_var("PROFILE_API_TIMEOUT_SECS")
                .unwrap_or(defaults.profile_api_timeout),
        }
    }

    pub fn cache_ttl_duration(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn profile_api_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.profile_api_timeout)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_TTL_SECS,
            server_port: 3000,
            profile_api_url: "http://localhost:3001".to_string(),
            profile_api_token: None,
            profile_api_timeout: 10,
        }
    }
}
