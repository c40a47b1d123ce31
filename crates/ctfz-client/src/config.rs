//! Client configuration.

use std::fmt;

/// Public content delivery API host.
pub const DEFAULT_BASE_URL: &str = "https://cdn.contentful.com";

/// Environment used when none is configured.
pub const DEFAULT_ENVIRONMENT: &str = "master";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors, raised before any request is made.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("space id must not be empty")]
    MissingSpaceId,
    #[error("access token must not be empty")]
    MissingAccessToken,
    /// The token contains characters that cannot appear in an HTTP header.
    #[error("access token contains invalid header characters")]
    InvalidAccessToken,
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Where and how to reach the delivery API.
#[derive(Clone)]
pub struct ContentfulConfig {
    pub space_id: String,
    /// Delivery (or preview) API access token, sent as a bearer token.
    pub access_token: String,
    pub environment: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl ContentfulConfig {
    /// Create a configuration with the default environment, host and timeout.
    pub fn new(space_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            space_id: space_id.into(),
            access_token: access_token.into(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Check required values are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.space_id.trim().is_empty() {
            return Err(ConfigError::MissingSpaceId);
        }
        if self.access_token.trim().is_empty() {
            return Err(ConfigError::MissingAccessToken);
        }
        Ok(())
    }
}

// Keeps the token out of logs.
impl fmt::Debug for ContentfulConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentfulConfig")
            .field("space_id", &self.space_id)
            .field("access_token", &"[REDACTED]")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
