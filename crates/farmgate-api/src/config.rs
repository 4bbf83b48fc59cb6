//! API configuration.

use farmgate_data::{FetchClient, Transport};

/// Fallback base URL for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "FARMGATE_API_URL";

/// Connection settings for the storefront backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL all service paths are resolved against.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from the environment, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Build the shared HTTP client with the JSON defaults every service
    /// expects.
    pub fn client<T: Transport>(&self, transport: T) -> FetchClient<T> {
        FetchClient::new(transport)
            .with_base_url(self.base_url.clone())
            .with_default_header("Content-Type", "application/json")
            .with_default_header("Accept", "application/json")
    }
}
