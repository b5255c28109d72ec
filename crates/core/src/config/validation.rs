//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `searx_url` is empty or has no http(s) scheme
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `user_agent` is empty
    /// - `cache_dir` is empty while caching is enabled
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.searx_url.is_empty() {
            return Err(ConfigError::Invalid { field: "searx_url".into(), reason: "must not be empty".into() });
        }
        if !self.searx_url.starts_with("http://") && !self.searx_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                field: "searx_url".into(),
                reason: "must start with http:// or https://".into(),
            });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.cache_enabled && self.cache_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "cache_dir".into(),
                reason: "must not be empty when cache_enabled is set".into(),
            });
        }

        Ok(())
    }
}
