//! SearXNG client and convenience entry points for quarry.
//!
//! This crate provides the HTTP search provider plus the two top-level
//! wrappers, [`text_search`] and [`news_search`], which wire configuration,
//! client, and the cached executor together.

pub mod searx;

pub use searx::{SearxClient, SearxConfig, SearxError};

use quarry_core::{AppConfig, CacheStore, Error, Query, SearchKind, SearchResults, Searcher};

/// Run a text search configured by `config`.
///
/// Results are memoized on disk when `config.cache_enabled` is set;
/// otherwise every call reaches the search instance.
pub async fn text_search(config: &AppConfig, query: &Query) -> Result<SearchResults, Error> {
    run(config, SearchKind::Text, query).await
}

/// Run a news search configured by `config`.
///
/// Same delegate-and-return shape as [`text_search`], against the news
/// category of the instance.
pub async fn news_search(config: &AppConfig, query: &Query) -> Result<SearchResults, Error> {
    run(config, SearchKind::News, query).await
}

async fn run(config: &AppConfig, kind: SearchKind, query: &Query) -> Result<SearchResults, Error> {
    let client = SearxClient::new(SearxConfig::from_app(config)).map_err(Error::upstream)?;

    let searcher = if config.cache_enabled {
        Searcher::with_cache(client, CacheStore::open(&config.cache_dir).await?)
    } else {
        Searcher::new(client)
    };

    match kind {
        SearchKind::Text => searcher.text(query).await,
        SearchKind::News => searcher.news(query).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bad_instance_url_surfaces_as_upstream() {
        let config = AppConfig { searx_url: "not a url".into(), ..Default::default() };
        let result = text_search(&config, &Query::new("test")).await;
        assert!(matches!(result, Err(Error::Upstream(_))));
    }

    #[tokio::test]
    async fn test_unwritable_cache_dir_aborts() {
        let tmp = tempfile::tempdir().unwrap();
        let occupied = tmp.path().join("occupied");
        tokio::fs::write(&occupied, "file, not a directory").await.unwrap();

        let config = AppConfig { cache_enabled: true, cache_dir: occupied, ..Default::default() };
        let result = text_search(&config, &Query::new("test")).await;
        assert!(matches!(result, Err(Error::Storage { .. })));
    }
}
