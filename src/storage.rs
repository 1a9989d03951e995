//! Durable key-value storage for session state and the home-feed cache.
//!
//! Storage is deliberately dumb: keys map to opaque string blobs, absence is
//! a normal state (first run), and there is no transactional guard around
//! read-then-write. Call sites treat writes as best-effort and log failures
//! rather than surfacing them.

use async_trait::async_trait;
use eyre::Context;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Trait for durable key-value storage.
///
/// This trait abstracts the persistence shim to enable dependency injection
/// and in-memory stores in tests. Implementations include the production
/// file-backed [`FileStore`] and [`MemoryStore`].
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored under the key yet.
    async fn get(&self, key: &str) -> eyre::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> eyre::Result<()>;
}

/// File-backed store keeping one file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the platform data directory, e.g.
    /// `~/.local/share/tubefeed` on Linux.
    ///
    /// Returns `None` when the platform has no data directory at all.
    pub fn in_data_dir() -> Option<Self> {
        Some(Self::new(dirs::data_dir()?.join("tubefeed")))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

#[async_trait]
impl Storage for FileStore {
    async fn get(&self, key: &str) -> eyre::Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read stored value for {key}")),
        }
    }

    async fn set(&self, key: &str, value: &str) -> eyre::Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create store directory {}", self.dir.display()))?;
        tokio::fs::write(self.path_for(key), value)
            .await
            .with_context(|| format!("write stored value for {key}"))
    }
}

/// In-memory store for tests and embedding without a filesystem.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

#[async_trait]
impl Storage for MemoryStore {
    async fn get(&self, key: &str) -> eyre::Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> eyre::Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn file_store_round_trips_values() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.get("isLoggedIn").await.unwrap(), None);

        store.set("isLoggedIn", "true").await.unwrap();
        assert_eq!(
            store.get("isLoggedIn").await.unwrap().as_deref(),
            Some("true")
        );

        store.set("isLoggedIn", "false").await.unwrap();
        assert_eq!(
            store.get("isLoggedIn").await.unwrap().as_deref(),
            Some("false")
        );
    }

    #[tokio::test]
    async fn file_store_handles_at_prefixed_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store
            .set("@CategorizedVideosCache", r#"{"REACT":[]}"#)
            .await
            .unwrap();
        assert_eq!(
            store.get("@CategorizedVideosCache").await.unwrap().as_deref(),
            Some(r#"{"REACT":[]}"#)
        );
    }

    #[tokio::test]
    async fn memory_store_clones_share_state() {
        let store = MemoryStore::default();
        let clone = store.clone();

        store.set("k", "v").await.unwrap();
        assert_eq!(clone.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
