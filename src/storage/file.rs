//! File-backed persistence: one JSON file per key inside a data directory.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{PersistenceProvider, StorageError};

#[derive(Debug, Clone)]
pub struct FilePersistence {
    dir: PathBuf,
}

impl FilePersistence {
    /// Create a provider rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PersistenceProvider for FilePersistence {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        // The temp file lives in the same directory so persist is a rename;
        // it is removed on drop if any step fails.
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(blob.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;
        debug!("Wrote {} bytes to {}", blob.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_reads_none() {
        let dir = TempDir::new().unwrap();
        let provider = FilePersistence::new(dir.path()).unwrap();
        assert!(provider.read("nothing").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let provider = FilePersistence::new(dir.path()).unwrap();

        provider.write("records", "{\"m3e\":[]}").unwrap();
        assert_eq!(
            provider.read("records").unwrap().as_deref(),
            Some("{\"m3e\":[]}")
        );
        assert!(provider.path_for("records").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let provider = FilePersistence::new(dir.path()).unwrap();
        // A non-empty directory in the target's place makes the final rename fail.
        let blocker = provider.path_for("records");
        fs::create_dir_all(blocker.join("inner")).unwrap();

        assert!(provider.write("records", "blob").is_err());

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("records.json")]);
    }

    #[test]
    fn test_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let provider = FilePersistence::new(dir.path()).unwrap();

        provider.write("records", "first").unwrap();
        provider.write("records", "second").unwrap();
        assert_eq!(provider.read("records").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let provider = FilePersistence::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(provider.dir(), nested.as_path());
    }
}
