//! Pluggable key-value persistence.
//!
//! The store does not talk to the filesystem directly; it goes through a
//! [`StorageBackend`] so an embedding application can decide where the data
//! lives and tests can run against an in-memory fake.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::StoreError;

/// String key → string value persistence.
///
/// `get` is infallible by contract: absent or unreadable data is `None`,
/// never an error. Only writes can fail.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// One `<key>.json` file per key under a data directory.
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `data_dir`, creating the directory if needed.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are caller-chosen; flatten anything path-like to a safe name.
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.data_dir.join(format!("{}.json", name))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No stored value for key '{}'", key);
                None
            }
            Err(err) => {
                warn!("Failed to read '{}': {}", path.display(), err);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        // Write-then-rename so a torn write can never leave a half-written
        // value under the real key.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory backend; the test fake. Never fails.
#[derive(Default)]
pub struct MemoryBackend {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_round_trip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("data"), None);

        backend.set("data", "{}").unwrap();
        assert_eq!(backend.get("data").as_deref(), Some("{}"));

        backend.remove("data").unwrap();
        assert_eq!(backend.get("data"), None);
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        assert_eq!(backend.get("data"), None);
        backend.set("data", r#"{"users":[]}"#).unwrap();
        assert_eq!(backend.get("data").as_deref(), Some(r#"{"users":[]}"#));

        // Removing twice is fine.
        backend.remove("data").unwrap();
        backend.remove("data").unwrap();
        assert_eq!(backend.get("data"), None);
    }

    #[test]
    fn test_file_backend_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let backend = FileBackend::new(dir.path()).unwrap();
            backend.set("session", r#"{"id":"1"}"#).unwrap();
        }
        let backend = FileBackend::new(dir.path()).unwrap();
        assert_eq!(backend.get("session").as_deref(), Some(r#"{"id":"1"}"#));
    }

    #[test]
    fn test_file_backend_sanitizes_keys() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        backend.set("../escape/attempt", "x").unwrap();
        assert_eq!(backend.get("../escape/attempt").as_deref(), Some("x"));

        // The value landed inside the data dir, not outside it.
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_file_backend_overwrite_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        backend.set("data", "first").unwrap();
        backend.set("data", "second").unwrap();
        assert_eq!(backend.get("data").as_deref(), Some("second"));
    }
}
