use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};

/// A value stored in a [`Collection`], identified by a unique key.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Key: PartialEq + Display + ?Sized;

    fn key(&self) -> &Self::Key;
}

#[derive(Debug)]
enum Backend {
    Memory,
    Snapshot(PathBuf),
}

/// Keyed records kept in insertion order.
///
/// With a snapshot backend the whole collection is rewritten to its JSON file after
/// every mutation. Writes happen while the write lock is held, so snapshots never
/// interleave and a read-modify-write through [`Collection::update`] is atomic with
/// respect to other callers in the process. Mutations are staged on a copy and only
/// replace the live records once the snapshot write succeeds.
#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    backend: Arc<Backend>,
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            backend: Arc::clone(&self.backend),
            items: Arc::clone(&self.items),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn in_memory(name: &'static str) -> Self {
        Self {
            name,
            backend: Arc::new(Backend::Memory),
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Opens a snapshot-backed collection. A missing, unreadable or corrupt file
    /// yields an empty collection instead of an error.
    pub async fn open(name: &'static str, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = load_snapshot::<T>(name, &path).await;
        debug!("Loaded {} {} record(s) from {}", items.len(), name, path.display());
        Self {
            name,
            backend: Arc::new(Backend::Snapshot(path)),
            items: Arc::new(RwLock::new(items)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    pub async fn get(&self, key: &T::Key) -> Option<T> {
        let items = self.items.read().await;
        items.iter().find(|item| item.key() == key).cloned()
    }

    pub async fn list(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn insert(&self, item: T) -> Result<()> {
        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.key() == item.key()) {
            return Err(StoreError::Duplicate {
                collection: self.name,
                key: item.key().to_string(),
            });
        }
        let mut next = items.clone();
        next.push(item);
        self.commit(&mut items, next).await
    }

    /// Returns the record under `key`, inserting `init()` when it is missing.
    /// Only an insertion touches the snapshot.
    pub async fn get_or_insert_with(&self, key: &T::Key, init: impl FnOnce() -> T) -> Result<T> {
        if let Some(found) = self.get(key).await {
            return Ok(found);
        }
        let mut items = self.items.write().await;
        if let Some(found) = items.iter().find(|item| item.key() == key) {
            return Ok(found.clone());
        }
        let item = init();
        let mut next = items.clone();
        next.push(item.clone());
        self.commit(&mut items, next).await?;
        Ok(item)
    }

    /// Applies `f` to the record under `key`. Returns `None` when there is no such record.
    pub async fn update<R>(&self, key: &T::Key, f: impl FnOnce(&mut T) -> R) -> Result<Option<R>> {
        let mut items = self.items.write().await;
        let Some(idx) = items.iter().position(|item| item.key() == key) else {
            return Ok(None);
        };
        let mut next = items.clone();
        let out = f(&mut next[idx]);
        self.commit(&mut items, next).await?;
        Ok(Some(out))
    }

    /// Like [`Collection::update`], creating the record with `init` first when it is missing.
    pub async fn upsert<R>(
        &self,
        key: &T::Key,
        init: impl FnOnce() -> T,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R> {
        let mut items = self.items.write().await;
        let mut next = items.clone();
        let idx = match next.iter().position(|item| item.key() == key) {
            Some(idx) => idx,
            None => {
                next.push(init());
                next.len() - 1
            }
        };
        let out = f(&mut next[idx]);
        self.commit(&mut items, next).await?;
        Ok(out)
    }

    /// Writes `next` to the snapshot and only then makes it visible. A failed write
    /// leaves the live records untouched.
    async fn commit(&self, items: &mut Vec<T>, next: Vec<T>) -> Result<()> {
        self.persist(&next).await?;
        *items = next;
        Ok(())
    }

    async fn persist(&self, items: &[T]) -> Result<()> {
        let Backend::Snapshot(path) = self.backend.as_ref() else {
            return Ok(());
        };
        let bytes = serde_json::to_vec_pretty(items).map_err(|source| StoreError::Serialize {
            collection: self.name,
            source,
        })?;
        let tmp = path.with_extension("json.tmp");
        let io_err = |source| StoreError::Io {
            collection: self.name,
            source,
        };
        tokio::fs::write(&tmp, bytes).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, path).await.map_err(io_err)?;
        Ok(())
    }
}

async fn load_snapshot<T: Record>(name: &str, path: &Path) -> Vec<T> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("Could not read {} snapshot {}: {}; starting empty", name, path.display(), e);
            return Vec::new();
        }
    };
    match serde_json::from_slice::<Vec<T>>(&bytes) {
        Ok(items) => items,
        Err(e) => {
            warn!("Corrupt {} snapshot {}: {}; starting empty", name, path.display(), e);
            Vec::new()
        }
    }
}
