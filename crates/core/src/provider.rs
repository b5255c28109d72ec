//! The search provider seam.
//!
//! The executor treats the provider as an external collaborator: it hands
//! over the full query, receives a finite sequence of opaque records, and
//! never interprets provider-specific failures.

use crate::{Error, Query};

/// One opaque result item as returned by the provider.
///
/// The core never inspects or validates its shape beyond iterating it.
pub type ResultRecord = serde_json::Map<String, serde_json::Value>;

/// Which vertical a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Text,
    News,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Text => "text",
            SearchKind::News => "news",
        }
    }
}

/// An external search provider.
///
/// Implementations own all network communication, pagination, and backend
/// selection. The returned sequence must be finite and fully materialized;
/// errors cross this boundary as [`Error::Upstream`].
#[async_trait::async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, kind: SearchKind, query: &Query) -> Result<Vec<ResultRecord>, Error>;
}
