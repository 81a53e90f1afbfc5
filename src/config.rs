//! Backend API configuration
//!
//! The base URL is an explicit value handed to the client instead of
//! ambient global state. Deployments override the local default through
//! an environment variable; everything downstream receives the resolved
//! [`ApiConfig`] by injection.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the backend base URL.
pub const API_BASE_ENV: &str = "STOCK_INSIGHT_API_BASE";

/// Base URL used for local development when no override is set.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Resolved backend location, injected into the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from a base URL, normalizing trailing slashes.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Resolve from the environment, falling back to the local default.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_ENV) {
            Ok(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Self::default(),
        }
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
