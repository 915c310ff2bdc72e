//! # Backend endpoint configuration
//!
//! The client talks to one backend, addressed by [`ApiConfig::base_url`].
//! A browser bundle has no runtime environment, so the URL is baked in at
//! compile time from `NEOWATCH_API_URL` and falls back to the local
//! development backend. [`ApiConfig::endpoint`] joins request paths onto
//! the base without doubling slashes.

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, no trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApiConfig {
    /// Read the base URL baked in at compile time.
    pub fn from_env() -> Self {
        let base_url = option_env!("NEOWATCH_API_URL").unwrap_or(DEFAULT_BASE_URL);
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joining() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(
            config.endpoint("/auth/login"),
            "http://localhost:8000/auth/login"
        );
        assert_eq!(config.endpoint("history"), "http://localhost:8000/history");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.example.org/");
        assert_eq!(config.base_url, "https://api.example.org");
        assert_eq!(
            config.endpoint("/predict"),
            "https://api.example.org/predict"
        );
    }
}
