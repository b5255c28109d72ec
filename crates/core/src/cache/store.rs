//! Cache store operations.
//!
//! Maps cache keys to entry files under a single directory. An entry holds
//! the full, ordered result sequence for one key and is replaced wholesale
//! on every write.

use crate::Error;
use crate::provider::ResultRecord;
use std::path::{Path, PathBuf};

/// File-backed store mapping cache keys to result sequences.
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// Open a store rooted at `dir`, creating the directory if absent.
    ///
    /// Fails with [`Error::Storage`] if the path exists as a non-directory
    /// or cannot be created.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, Error> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| Error::storage(&dir, e))?;
        Ok(Self { dir })
    }

    /// Directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load the entry for `key`.
    ///
    /// Returns `Ok(None)` if no entry exists. A file that does not parse as
    /// a result sequence is [`Error::CorruptEntry`]; other read failures are
    /// [`Error::Storage`].
    pub async fn load(&self, key: &str) -> Result<Option<Vec<ResultRecord>>, Error> {
        let path = self.entry_path(key);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::storage(path, e)),
        };

        let records = serde_json::from_str(&raw)
            .map_err(|e| Error::CorruptEntry { key: key.to_string(), source: e })?;
        Ok(Some(records))
    }

    /// Write the entry for `key`, replacing any previous contents.
    ///
    /// The entry is pretty-printed JSON so cached result sets stay
    /// human-inspectable.
    pub async fn save(&self, key: &str, records: &[ResultRecord]) -> Result<(), Error> {
        let path = self.entry_path(key);
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| Error::CorruptEntry { key: key.to_string(), source: e })?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| Error::storage(path, e))
    }

    /// Delete every entry file in the store.
    ///
    /// Returns the number of entries removed. Non-entry files in the
    /// directory are left alone.
    pub async fn purge(&self) -> Result<u64, Error> {
        let mut removed = 0;
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| Error::storage(&self.dir, e))?;

        while let Some(entry) = entries.next_entry().await.map_err(|e| Error::storage(&self.dir, e))? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                tokio::fs::remove_file(&path)
                    .await
                    .map_err(|e| Error::storage(path, e))?;
                removed += 1;
            }
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> ResultRecord {
        let mut map = ResultRecord::new();
        map.insert("title".into(), title.into());
        map.insert("url".into(), format!("https://example.com/{title}").into());
        map
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CacheStore::open(tmp.path().join("cache")).await.unwrap();

        let records = vec![record("first"), record("second")];
        store.save("somekey", &records).await.unwrap();

        let loaded = store.load("somekey").await.unwrap().unwrap();
        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn test_load_missing_entry() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CacheStore::open(tmp.path().join("cache")).await.unwrap();
        assert!(store.load("nonexistent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CacheStore::open(tmp.path()).await.unwrap();

        store.save("k", &[record("old1"), record("old2")]).await.unwrap();
        store.save("k", &[record("new")]).await.unwrap();

        let loaded = store.load("k").await.unwrap().unwrap();
        assert_eq!(loaded, vec![record("new")]);
    }

    #[tokio::test]
    async fn test_corrupt_entry() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CacheStore::open(tmp.path()).await.unwrap();

        tokio::fs::write(tmp.path().join("bad.json"), "{ not json")
            .await
            .unwrap();

        let result = store.load("bad").await;
        assert!(matches!(result, Err(Error::CorruptEntry { key, .. }) if key == "bad"));
    }

    #[tokio::test]
    async fn test_entry_is_human_inspectable() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CacheStore::open(tmp.path()).await.unwrap();

        store.save("k", &[record("first")]).await.unwrap();

        let raw = tokio::fs::read_to_string(tmp.path().join("k.json")).await.unwrap();
        assert!(raw.contains('\n'), "entry should be pretty-printed");
        assert!(raw.contains("\"title\""));
    }

    #[tokio::test]
    async fn test_open_rejects_non_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file_path = tmp.path().join("occupied");
        tokio::fs::write(&file_path, "not a directory").await.unwrap();

        let result = CacheStore::open(&file_path).await;
        assert!(matches!(result, Err(Error::Storage { .. })));
    }

    #[tokio::test]
    async fn test_purge() {
        let tmp = tempfile::tempdir().unwrap();
        let store = CacheStore::open(tmp.path()).await.unwrap();

        store.save("a", &[record("a")]).await.unwrap();
        store.save("b", &[record("b")]).await.unwrap();

        let removed = store.purge().await.unwrap();
        assert_eq!(removed, 2);
        assert!(store.load("a").await.unwrap().is_none());
        assert!(store.load("b").await.unwrap().is_none());
    }
}
