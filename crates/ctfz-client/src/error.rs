//! Delivery API client error types.

/// Errors from delivery API calls.
#[derive(Debug, thiserror::Error)]
pub enum ContentfulError {
    /// HTTP transport error, after retries.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The API returned a non-2xx status (401 for a bad token).
    #[error("delivery API {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(reqwest::Error),
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}

impl ContentfulError {
    /// Whether the API rejected the credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}
