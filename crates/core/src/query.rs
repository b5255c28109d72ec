//! Search query parameters and validation.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters for one logical search request.
///
/// Every field has a documented default; construct with [`Query::new`] and
/// override fields with struct-update syntax. The provider receives the
/// full set; only the semantically relevant subset participates in cache
/// key derivation (see [`crate::cache::compute_cache_key`]).
#[derive(Debug, Clone, Serialize)]
pub struct Query {
    /// Search query text (required, non-empty).
    pub text: String,

    /// Result count ceiling (default 10).
    pub max_results: usize,

    /// Region code, e.g. "us-en", "uk-en"; "wt-wt" is world-wide (default).
    pub region: String,

    /// Safe search level (default moderate).
    pub safesearch: SafeSearch,

    /// Time window filter (default none).
    pub timelimit: Option<Timelimit>,

    /// Provider backend profile (default api).
    pub backend: Backend,

    /// Maximum result pages to walk (default 3). Not part of the cache key.
    pub max_pages: usize,

    /// Whether the provider should follow HTTP redirects (default true).
    /// Not part of the cache key.
    pub follow_redirects: bool,

    /// Delay between page fetches, to stay under provider rate limits
    /// (default 2s). Not part of the cache key.
    #[serde(skip)]
    pub delay: Duration,
}

/// Safe search filtering levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    Off,
    Moderate,
    Strict,
}

/// Time window filters accepted by the provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Timelimit {
    #[serde(rename = "d")]
    Day,
    #[serde(rename = "w")]
    Week,
    #[serde(rename = "m")]
    Month,
    #[serde(rename = "y")]
    Year,
}

/// Provider backend profiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    Api,
    Html,
    Lite,
}

impl Query {
    /// Create a query for the given text with default parameters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_results: 10,
            region: "wt-wt".to_string(),
            safesearch: SafeSearch::Moderate,
            timelimit: None,
            backend: Backend::Api,
            max_pages: 3,
            follow_redirects: true,
            delay: Duration::from_secs(2),
        }
    }

    /// Validate the query parameters.
    pub fn validate(&self) -> Result<(), crate::Error> {
        use crate::Error;

        if self.text.trim().is_empty() {
            return Err(Error::InvalidQuery("query text cannot be empty".to_string()));
        }
        if self.max_results == 0 {
            return Err(Error::InvalidQuery("max_results must be at least 1".to_string()));
        }
        if self.max_pages == 0 {
            return Err(Error::InvalidQuery("max_pages must be at least 1".to_string()));
        }

        Ok(())
    }
}

impl SafeSearch {
    /// Provider-side numeric level (0 = off, 1 = moderate, 2 = strict).
    pub fn as_level(&self) -> u8 {
        match self {
            SafeSearch::Off => 0,
            SafeSearch::Moderate => 1,
            SafeSearch::Strict => 2,
        }
    }
}

impl Timelimit {
    /// Provider-side time range name.
    pub fn as_range(&self) -> &'static str {
        match self {
            Timelimit::Day => "day",
            Timelimit::Week => "week",
            Timelimit::Month => "month",
            Timelimit::Year => "year",
        }
    }
}

impl Backend {
    /// Short identifier used in cache keys and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Api => "api",
            Backend::Html => "html",
            Backend::Lite => "lite",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_defaults() {
        let query = Query::new("test");
        assert_eq!(query.max_results, 10);
        assert_eq!(query.region, "wt-wt");
        assert_eq!(query.safesearch, SafeSearch::Moderate);
        assert!(query.timelimit.is_none());
        assert_eq!(query.backend, Backend::Api);
        assert_eq!(query.max_pages, 3);
        assert!(query.follow_redirects);
        assert_eq!(query.delay, Duration::from_secs(2));
    }

    #[test]
    fn test_valid_query() {
        let query = Query { max_results: 5, timelimit: Some(Timelimit::Month), ..Query::new("rust programming") };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_empty_text() {
        let query = Query::new("   ");
        assert!(matches!(query.validate(), Err(Error::InvalidQuery(_))));
    }

    #[test]
    fn test_zero_max_results() {
        let query = Query { max_results: 0, ..Query::new("test") };
        assert!(matches!(query.validate(), Err(Error::InvalidQuery(_))));
    }

    #[test]
    fn test_zero_max_pages() {
        let query = Query { max_pages: 0, ..Query::new("test") };
        assert!(matches!(query.validate(), Err(Error::InvalidQuery(_))));
    }

    #[test]
    fn test_timelimit_serializes_short_form() {
        let json = serde_json::to_string(&Timelimit::Week).unwrap();
        assert_eq!(json, r#""w""#);
    }

    #[test]
    fn test_safesearch_levels() {
        assert_eq!(SafeSearch::Off.as_level(), 0);
        assert_eq!(SafeSearch::Moderate.as_level(), 1);
        assert_eq!(SafeSearch::Strict.as_level(), 2);
    }
}
