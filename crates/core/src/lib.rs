//! Core types and shared functionality for quarry.
//!
//! This crate provides:
//! - The query model with validated, documented defaults
//! - Deterministic cache key derivation and a file-backed result cache
//! - The cached query executor
//! - Configuration structures
//! - Unified error types

pub mod cache;
pub mod config;
pub mod error;
pub mod executor;
pub mod provider;
pub mod query;

pub use cache::{CacheStore, compute_cache_key};
pub use config::AppConfig;
pub use error::Error;
pub use executor::{SearchResults, Searcher};
pub use provider::{ResultRecord, SearchKind, SearchProvider};
pub use query::{Backend, Query, SafeSearch, Timelimit};
