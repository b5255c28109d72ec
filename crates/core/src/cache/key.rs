//! Deterministic cache key derivation.

use crate::provider::SearchKind;
use crate::query::Query;
use sha2::{Digest, Sha256};

/// Compute the cache key for a query.
///
/// The key is the lowercase hex SHA-256 of a canonical JSON serialization
/// of the parameters that affect search semantics: kind, text, max_results,
/// region, safesearch, timelimit, backend. The JSON map keeps its keys
/// sorted, so the digest is independent of construction order and stable
/// across runs and platforms.
///
/// Pagination, redirect, and delay settings are deliberately excluded:
/// results fetched under different pagination settings share one entry, a
/// documented imprecision of the cache.
pub fn compute_cache_key(kind: SearchKind, query: &Query) -> String {
    let params = serde_json::json!({
        "kind": kind,
        "query": query.text,
        "max_results": query.max_results,
        "region": query.region,
        "safesearch": query.safesearch,
        "timelimit": query.timelimit,
        "backend": query.backend,
    });

    let mut hasher = Sha256::new();
    hasher.update(params.to_string().as_bytes());
    hex::encode(hasher.finalize())
}
