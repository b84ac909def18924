use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{PersistenceProvider, StorageError};

/// In-memory provider. Clones share the same underlying map, so a caller can
/// keep a handle and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    inner: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the provider with an existing blob.
    pub fn with_blob(key: &str, blob: impl Into<String>) -> Self {
        let provider = Self::new();
        provider.lock().insert(key.to_string(), blob.into());
        provider
    }

    /// Returns a copy of the blob stored under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PersistenceProvider for MemoryPersistence {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), blob.to_string());
        *self.writes.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let provider = MemoryPersistence::new();
        let handle = provider.clone();

        provider.write("k", "v").unwrap();

        assert_eq!(handle.get("k").as_deref(), Some("v"));
        assert_eq!(handle.write_count(), 1);
    }

    #[test]
    fn test_seeded_blob_is_readable() {
        let provider = MemoryPersistence::with_blob("k", "seed");
        assert_eq!(provider.read("k").unwrap().as_deref(), Some("seed"));
        assert_eq!(provider.write_count(), 0);
    }
}
