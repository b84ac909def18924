//! Durable storage behind the record store.
//!
//! The store only ever needs a key/blob interface; where the blob ends up is
//! up to the [`PersistenceProvider`] it is given.

pub mod file;
pub mod memory;

pub use file::FilePersistence;
pub use memory::MemoryPersistence;

use std::path::PathBuf;

use thiserror::Error;

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "baseball-records";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unavailable: {0}")]
    Unavailable(String),
}

/// Key/blob store the records are persisted through.
pub trait PersistenceProvider {
    /// Returns `None` when nothing has been written under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces whatever was stored under `key`.
    fn write(&self, key: &str, blob: &str) -> Result<(), StorageError>;
}

impl<P: PersistenceProvider + ?Sized> PersistenceProvider for Box<P> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        (**self).write(key, blob)
    }
}

/// Platform-specific data directory for this application, e.g.
/// `~/.local/share/baseball-records` on Linux.
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    let mut path = dirs::data_dir().ok_or_else(|| {
        StorageError::Unavailable("unable to determine data directory for your platform".into())
    })?;
    path.push(APP_DIR_NAME);
    Ok(path)
}
