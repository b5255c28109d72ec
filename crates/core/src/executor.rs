//! The cached query executor.
//!
//! Routes a query either straight to the provider or through the
//! file-backed cache: hits are served without contacting the provider,
//! misses are fetched, persisted, and returned.

use crate::cache::{CacheStore, compute_cache_key};
use crate::provider::{ResultRecord, SearchKind, SearchProvider};
use crate::{Error, Query};

/// Executes queries against a provider, optionally through a cache.
///
/// Calls run to completion one at a time; the executor holds no locks. Two
/// concurrent misses on the same key from separate callers both fetch and
/// both write, with last-writer-wins on the entry file — callers that need
/// stronger guarantees must serialize access themselves.
#[derive(Debug)]
pub struct Searcher<P> {
    provider: P,
    cache: Option<CacheStore>,
}

impl<P: SearchProvider> Searcher<P> {
    /// Create an executor that always delegates to the provider.
    pub fn new(provider: P) -> Self {
        Self { provider, cache: None }
    }

    /// Create an executor that memoizes results in `store`.
    pub fn with_cache(provider: P, store: CacheStore) -> Self {
        Self { provider, cache: Some(store) }
    }

    /// Run a text search.
    pub async fn text(&self, query: &Query) -> Result<SearchResults, Error> {
        self.run(SearchKind::Text, query).await
    }

    /// Run a news search.
    pub async fn news(&self, query: &Query) -> Result<SearchResults, Error> {
        self.run(SearchKind::News, query).await
    }

    /// Execute one query, consulting the cache when one is attached.
    ///
    /// Cache policy:
    /// - a parseable entry is returned as-is, without contacting the provider;
    /// - a corrupt entry is treated as a miss: logged, refetched, overwritten;
    /// - a failed write after a successful fetch is logged and the fetched
    ///   results are returned anyway;
    /// - provider failures propagate unchanged, on the miss path and when no
    ///   cache is attached.
    async fn run(&self, kind: SearchKind, query: &Query) -> Result<SearchResults, Error> {
        query.validate()?;

        let Some(store) = &self.cache else {
            let records = self.provider.search(kind, query).await?;
            return Ok(SearchResults { records, from_cache: false });
        };

        let key = compute_cache_key(kind, query);

        match store.load(&key).await {
            Ok(Some(records)) => {
                tracing::debug!(key = %key, count = records.len(), "cache hit");
                return Ok(SearchResults { records, from_cache: true });
            }
            Ok(None) => {
                tracing::debug!(key = %key, "cache miss");
            }
            Err(Error::CorruptEntry { key, source }) => {
                tracing::warn!(key = %key, error = %source, "corrupt cache entry, refetching");
            }
            Err(e) => return Err(e),
        }

        let records = self.provider.search(kind, query).await?;

        if let Err(e) = store.save(&key, &records).await {
            tracing::warn!(key = %key, error = %e, "failed to persist fetched results");
        }

        Ok(SearchResults { records, from_cache: false })
    }
}

/// A fully materialized result sequence.
///
/// The underlying buffer is always finite and already drained from the
/// provider; iterating it never triggers another fetch. Consume it either
/// as a list ([`records`](Self::records) / [`into_records`](Self::into_records))
/// or as a single-pass iterator via [`IntoIterator`].
#[derive(Debug, Clone)]
pub struct SearchResults {
    records: Vec<ResultRecord>,
    from_cache: bool,
}

impl SearchResults {
    /// The records, in provider order.
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Consume into the owned record list.
    pub fn into_records(self) -> Vec<ResultRecord> {
        self.records
    }

    /// Borrowing iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    /// Whether this result set was served from the cache.
    pub fn from_cache(&self) -> bool {
        self.from_cache
    }

    /// Number of records in the result set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the result set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl IntoIterator for SearchResults {
    type Item = ResultRecord;
    type IntoIter = std::vec::IntoIter<ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
