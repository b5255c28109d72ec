//! Unified error types for quarry.

use std::path::PathBuf;

/// Unified error type for the quarry core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Query failed validation before any work was done.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// Cache directory or entry file could not be created, read, or written.
    #[error("cache storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cache entry exists but does not parse as a result sequence.
    #[error("corrupt cache entry {key}: {source}")]
    CorruptEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Opaque passthrough from the search provider. Never retried or
    /// classified here.
    #[error("search provider error: {0}")]
    Upstream(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a provider-side error as an opaque upstream failure.
    pub fn upstream(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::Upstream(Box::new(err))
    }

    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Storage { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::CorruptEntry {
            key: "abc123".to_string(),
            source: serde_json::from_str::<serde_json::Value>("not json").unwrap_err(),
        };
        assert!(err.to_string().contains("corrupt cache entry"));
        assert!(err.to_string().contains("abc123"));
    }

    #[test]
    fn test_upstream_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer hung up");
        let err = Error::upstream(io);
        assert!(err.to_string().contains("search provider error"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
