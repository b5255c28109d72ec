//! File-backed cache for search results.
//!
//! Results are memoized as one JSON file per cache key under a configured
//! directory. The format is a pretty-printed array of records so entries
//! stay human-inspectable; each write replaces the file wholesale. Entries
//! are never expired automatically — removal is an operator action (delete
//! the directory or call [`CacheStore::purge`]).

pub mod key;
pub mod store;

pub use key::compute_cache_key;
pub use store::CacheStore;
