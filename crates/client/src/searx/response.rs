//! SearXNG API response types.
//!
//! Only the envelope is given a shape; the result objects themselves stay
//! opaque records, fully determined by the instance.

use quarry_core::ResultRecord;
use serde::Deserialize;

/// Response envelope from the SearXNG JSON API.
///
/// Everything besides the result list (instance-reported totals, engine
/// diagnostics, suggestions) is ignored.
#[derive(Debug, Deserialize)]
pub struct SearxResponse {
    /// Result objects, passed through untouched.
    #[serde(default)]
    pub results: Vec<ResultRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_JSON: &str = r#"{
        "query": "rust programming",
        "number_of_results": 240,
        "results": [
            {
                "title": "Rust Programming Language",
                "url": "https://www.rust-lang.org/",
                "content": "A language empowering everyone",
                "engine": "duckduckgo",
                "score": 4.5
            },
            {
                "title": "Rust (programming language) - Wikipedia",
                "url": "https://en.wikipedia.org/wiki/Rust_(programming_language)",
                "content": "Rust is a general-purpose programming language",
                "engine": "wikipedia",
                "publishedDate": "2024-01-15T00:00:00"
            }
        ],
        "unresponsive_engines": []
    }"#;

    #[test]
    fn test_deserialize_response() {
        let response: SearxResponse = serde_json::from_str(FIXTURE_JSON).unwrap();
        assert_eq!(response.results.len(), 2);
    }

    #[test]
    fn test_records_stay_opaque() {
        let response: SearxResponse = serde_json::from_str(FIXTURE_JSON).unwrap();

        // arbitrary provider fields survive the passthrough untouched
        let first = &response.results[0];
        assert_eq!(first["title"], "Rust Programming Language");
        assert_eq!(first["score"], 4.5);

        let second = &response.results[1];
        assert_eq!(second["publishedDate"], "2024-01-15T00:00:00");
    }

    #[test]
    fn test_empty_envelope() {
        let response: SearxResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }
}
