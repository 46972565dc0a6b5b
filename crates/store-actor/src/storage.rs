//! # Backing Stores
//!
//! Every [`ResourceActor`](crate::ResourceActor) keeps its collection in memory and writes the
//! whole collection back to a [`KeyValueStore`] after each mutation. The store only sees
//! string keys and JSON text; it knows nothing about entities.
//!
//! Two implementations ship with the crate:
//!
//! - [`MemoryStore`]: an in-process map. Clones share the same map, so handing a clone to two
//!   controllers gives them the same "browser storage".
//! - [`FileStore`]: one `<key>.json` file per key inside a data directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Errors raised by a backing store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// A string key/value store holding serialized collections.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value under `key`, or `None` if nothing was ever written.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites the value under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a backing store.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// In-memory store. Cheap to clone; clones see the same entries.
#[derive(Clone, Default)]
pub struct MemoryStore(Arc<Mutex<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps this store in a [`SharedStore`].
    pub fn shared(&self) -> SharedStore {
        Arc::new(self.clone())
    }

    pub async fn is_empty(&self) -> bool {
        self.0.lock().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.0.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.0.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.lock().await.remove(key);
        Ok(())
    }
}

/// Staging-file counter, shared by every `FileStore` in the process.
static NEXT_STAGING: AtomicU64 = AtomicU64::new(0);

/// File-backed store: `<dir>/<key>.json`.
///
/// Each write is staged in its own `<key>.json.<pid>-<n>.tmp` and renamed over the target,
/// so a reader never observes a half-written blob and concurrent writers of one key never
/// share a staging file. The last rename wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the data directory.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        debug!(dir = %dir.display(), "FileStore opened");
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let n = NEXT_STAGING.fetch_add(1, Ordering::Relaxed);
        let tmp = self
            .dir
            .join(format!("{key}.json.{}-{n}.tmp", std::process::id()));
        tokio::fs::write(&tmp, value).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        std::env::temp_dir().join(format!("store-actor-{name}-{}-{nanos}", std::process::id()))
    }

    async fn staging_files(dir: &Path) -> usize {
        let mut entries = tokio::fs::read_dir(dir).await.unwrap();
        let mut count = 0;
        while let Some(entry) = entries.next_entry().await.unwrap() {
            if entry.file_name().to_string_lossy().ends_with(".tmp") {
                count += 1;
            }
        }
        count
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("cart", "[]".to_string()).await.unwrap();
        assert_eq!(other.get("cart").await.unwrap().as_deref(), Some("[]"));

        other.remove("cart").await.unwrap();
        assert!(store.get("cart").await.unwrap().is_none());
        // Removing twice is fine
        store.remove("cart").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_file_store_overwrites_and_removes() {
        let dir = scratch_dir("file");
        let store = FileStore::open(&dir).await.unwrap();

        assert!(store.get("orders").await.unwrap().is_none());

        store.set("orders", "[1]".to_string()).await.unwrap();
        store.set("orders", "[1,2]".to_string()).await.unwrap();
        assert_eq!(store.get("orders").await.unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(staging_files(&dir).await, 0);

        store.remove("orders").await.unwrap();
        store.remove("orders").await.unwrap();
        assert!(store.get("orders").await.unwrap().is_none());

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_like_keys() {
        let dir = scratch_dir("keys");
        let store = FileStore::open(&dir).await.unwrap();

        let result = store.set("../escape", "x".to_string()).await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_of_one_key_both_succeed() {
        let dir = scratch_dir("concurrent");
        let first = FileStore::open(&dir).await.unwrap();
        let second = FileStore::open(&dir).await.unwrap();

        for round in 0..200 {
            let a = format!("[{round},\"a\"]");
            let b = format!("[{round},\"b\"]");
            let (left, right) = tokio::join!(
                tokio::spawn({
                    let store = first.clone();
                    let value = a.clone();
                    async move { store.set("orders", value).await }
                }),
                tokio::spawn({
                    let store = second.clone();
                    let value = b.clone();
                    async move { store.set("orders", value).await }
                }),
            );
            left.unwrap().unwrap();
            right.unwrap().unwrap();

            let stored = first.get("orders").await.unwrap().unwrap();
            assert!(stored == a || stored == b, "round {round}: {stored}");
        }
        assert_eq!(staging_files(&dir).await, 0);

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
