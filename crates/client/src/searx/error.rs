//! SearXNG client error types.

use std::sync::Arc;

/// Errors from the SearXNG client.
#[derive(Debug, thiserror::Error)]
pub enum SearxError {
    /// Instance base URL is empty or does not parse.
    #[error("invalid instance URL: {0}")]
    InvalidBaseUrl(String),

    /// Rate limited by the instance.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SearxError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { SearxError::Timeout } else { SearxError::Network(Arc::new(err)) }
    }
}
