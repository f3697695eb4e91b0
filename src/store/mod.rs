mod error;

#[cfg(test)]
mod tests;

pub use error::StoreError;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Fixed key holding the chunk-set metadata for a directory.
pub const METADATA_KEY: &str = "chunks-metadata.json";

/// Fixed key holding the token usage ledger for a directory.
pub const USAGE_KEY: &str = "token-usage.json";

/// Key for the chunk body at the given sequence index.
pub fn chunk_key(index: usize) -> String {
    format!("chunk-{index}.txt")
}

/// Narrow persistence seam: keyed text blobs in a flat namespace.
///
/// All chunk, metadata and ledger I/O goes through this trait, so the
/// directory-backed store can be swapped for [`MemStore`] in tests.
pub trait Store {
    fn put(&self, key: &str, contents: &str) -> Result<(), StoreError>;
    fn get(&self, key: &str) -> Result<String, StoreError>;
    fn exists(&self, key: &str) -> bool;
    fn list(&self) -> Result<Vec<String>, StoreError>;
}

/// Store backed by one flat output directory, one file per key.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open the store at `root`, creating the directory (and parents) if
    /// absent. Idempotent: an existing directory is not an error.
    pub fn create(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|source| StoreError::CreateDir {
            path: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Wrap an existing directory without touching the filesystem.
    /// Reads against a missing directory surface as missing keys.
    pub fn open(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Store for DirStore {
    fn put(&self, key: &str, contents: &str) -> Result<(), StoreError> {
        fs::write(self.root.join(key), contents).map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })
    }

    fn get(&self, key: &str) -> Result<String, StoreError> {
        let path = self.root.join(key);
        if !path.is_file() {
            return Err(StoreError::KeyNotFound(key.to_string()));
        }
        fs::read_to_string(&path).map_err(|source| StoreError::Read {
            key: key.to_string(),
            source,
        })
    }

    fn exists(&self, key: &str) -> bool {
        self.root.join(key).is_file()
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = fs::read_dir(&self.root).map_err(StoreError::List)?;
        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(StoreError::List)?;
            if entry.file_type().map_err(StoreError::List)?.is_file() {
                keys.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// In-memory store, used as the swappable backend in tests.
#[derive(Default)]
pub struct MemStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a key, simulating an inconsistent on-disk state.
    pub fn remove(&self, key: &str) {
        self.entries().remove(key);
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Store for MemStore {
    fn put(&self, key: &str, contents: &str) -> Result<(), StoreError> {
        self.entries().insert(key.to_string(), contents.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String, StoreError> {
        self.entries()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::KeyNotFound(key.to_string()))
    }

    fn exists(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<String> = self.entries().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}
