//! Pluggable persistence backends for the collection store.
//!
//! An adapter moves raw JSON payloads in and out of storage, one payload
//! per [`CollectionKey`]. The store owns all parsing and seeding on top
//! of this; adapters never interpret the payloads they carry.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use gudang_types::CollectionKey;

use crate::error::StoreError;

/// Raw JSON payload storage, keyed by collection.
pub trait StorageAdapter: Send + Sync {
    /// Load the raw payload for a collection.
    ///
    /// Returns `Ok(None)` when no payload has been saved for the key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be read.
    fn load(&self, key: CollectionKey) -> Result<Option<String>, StoreError>;

    /// Save the raw payload for a collection, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backing storage cannot be written.
    fn save(&self, key: CollectionKey, payload: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// JSON file adapter
// ---------------------------------------------------------------------------

/// Stores each collection as `<key>.json` inside a data directory.
#[derive(Debug)]
pub struct JsonFileAdapter {
    dir: PathBuf,
}

impl JsonFileAdapter {
    /// Open an adapter rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Return the data directory this adapter writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: CollectionKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl StorageAdapter for JsonFileAdapter {
    fn load(&self, key: CollectionKey) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn save(&self, key: CollectionKey, payload: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        std::fs::write(&path, payload).map_err(|source| StoreError::Io { path, source })
    }
}

// ---------------------------------------------------------------------------
// In-memory adapter
// ---------------------------------------------------------------------------

/// Keeps payloads in a process-local map. Used by tests and previews.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    payloads: Mutex<BTreeMap<CollectionKey, String>>,
}

impl MemoryAdapter {
    /// Create an empty in-memory adapter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryAdapter {
    fn load(&self, key: CollectionKey) -> Result<Option<String>, StoreError> {
        let payloads = self
            .payloads
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(payloads.get(&key).cloned())
    }

    fn save(&self, key: CollectionKey, payload: &str) -> Result<(), StoreError> {
        let mut payloads = self
            .payloads
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        payloads.insert(key, payload.to_owned());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn memory_adapter_roundtrips_payloads() {
        let adapter = MemoryAdapter::new();
        assert!(adapter.load(CollectionKey::Stock).unwrap().is_none());

        adapter.save(CollectionKey::Stock, "[]").unwrap();
        assert_eq!(
            adapter.load(CollectionKey::Stock).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn file_adapter_uses_key_as_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFileAdapter::open(dir.path()).unwrap();

        adapter
            .save(CollectionKey::StockLedger, r#"[{"x":1}]"#)
            .unwrap();

        assert!(dir.path().join("stock-ledger.json").exists());
        assert_eq!(
            adapter.load(CollectionKey::StockLedger).unwrap().as_deref(),
            Some(r#"[{"x":1}]"#)
        );
    }

    #[test]
    fn file_adapter_reports_missing_payload_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = JsonFileAdapter::open(dir.path()).unwrap();
        assert!(adapter.load(CollectionKey::History).unwrap().is_none());
    }
}
