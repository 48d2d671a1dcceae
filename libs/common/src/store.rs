//! Key-value store abstraction
//!
//! Every persisted value in the application is a string stored under a string
//! key. This module defines the [`KeyValueStore`] trait and the two local
//! backends: an in-memory map and a single JSON file on disk. The Redis
//! backend lives in [`crate::cache`].

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::StoreResult;

/// String-keyed, string-valued storage
///
/// Implementations give no compare-and-swap: callers that read, modify and
/// write back a value race with any other writer of the same key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Short name of the backend, used in logs
    fn backend_tag(&self) -> &'static str;

    /// Get a value by key
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Set a value, overwriting any previous one
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a key. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> StoreResult<bool> {
        Ok(true)
    }
}

/// In-memory store, lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

/// File-backed store
///
/// The whole key/value map is kept in one JSON object file. Each write
/// rewrites the file through a sibling temp file and a rename, so a reader
/// never sees a half-written file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store persisted at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!("File store initialized at {}", path.display());
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreResult<HashMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(HashMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, serde_json::to_vec(entries)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!("File store flushed {} keys", entries.len());
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn backend_tag(&self) -> &'static str {
        "file"
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<bool> {
        let _guard = self.lock.lock().await;
        self.load().await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_memory_store_set_get_delete() -> StoreResult<()> {
        let store = MemoryStore::new();

        assert_eq!(store.get("missing").await?, None);

        store.set("key", "value").await?;
        assert_eq!(store.get("key").await?, Some("value".to_string()));

        store.set("key", "other").await?;
        assert_eq!(store.get("key").await?, Some("other".to_string()));

        store.delete("key").await?;
        assert_eq!(store.get("key").await?, None);

        // Deleting twice is fine
        store.delete("key").await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() -> StoreResult<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("store.json");

        let store = FileStore::new(&path);
        assert!(store.health_check().await?);
        store.set("a", "1").await?;
        store.set("b", "2").await?;
        store.delete("a").await?;

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("a").await?, None);
        assert_eq!(reopened.get("b").await?, Some("2".to_string()));
        assert!(!path.with_extension("tmp").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_file_store_rejects_corrupt_file() -> StoreResult<()> {
        let dir = tempdir()?;
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json")?;

        let store = FileStore::new(&path);
        assert!(store.get("a").await.is_err());
        Ok(())
    }
}
