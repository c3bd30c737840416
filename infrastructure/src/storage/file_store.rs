//! File-backed session store

use super::validate_key;
use crate::config::DEFAULT_QUOTA_BYTES;
use resolver_application::{SessionStore, StorageError};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Stores each key as `<key>.json` under a base directory.
///
/// Writes go to `<key>.json.tmp` first and are renamed into place, so a
/// crash mid-write never leaves a truncated payload behind.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
    quota_bytes: u64,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }

    /// Limit the total size of all stored payloads.
    pub fn with_quota(mut self, quota_bytes: u64) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    /// Bytes used by every stored payload except `key`'s.
    fn used_bytes_excluding(&self, key: &str) -> Result<u64, StorageError> {
        let entries = match fs::read_dir(&self.base_path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(unavailable(&self.base_path, e)),
        };

        let own = self.key_path(key);
        let mut total = 0;
        for entry in entries {
            let entry = entry.map_err(|e| unavailable(&self.base_path, e))?;
            let path = entry.path();
            if path == own || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let metadata = entry.metadata().map_err(|e| unavailable(&path, e))?;
            total += metadata.len();
        }
        Ok(total)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        validate_key(key)?;
        let path = self.key_path(key);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored value for '{}'", key);
                return Ok(None);
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(StorageError::corrupt(key, e));
            }
            Err(e) => return Err(unavailable(&path, e)),
        };

        serde_json::from_str(&contents).map(Some).map_err(|e| {
            warn!("Corrupt payload in {}: {}", path.display(), e);
            StorageError::corrupt(key, e)
        })
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        validate_key(key)?;
        let payload = value.to_string();

        let required = self.used_bytes_excluding(key)? + payload.len() as u64;
        if required > self.quota_bytes {
            warn!(
                "Rejecting write to '{}': {} bytes exceeds quota of {}",
                key, required, self.quota_bytes
            );
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                required,
                quota: self.quota_bytes,
            });
        }

        fs::create_dir_all(&self.base_path).map_err(|e| unavailable(&self.base_path, e))?;

        let path = self.key_path(key);
        let tmp_path = self.base_path.join(format!("{}.json.tmp", key));
        fs::write(&tmp_path, &payload).map_err(|e| unavailable(&tmp_path, e))?;
        fs::rename(&tmp_path, &path).map_err(|e| unavailable(&path, e))?;

        debug!("Wrote {} bytes to {}", payload.len(), path.display());
        Ok(())
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> StorageError {
    StorageError::Unavailable(format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        assert_eq!(store.get("AB12cd").unwrap(), None);
    }

    #[test]
    fn test_values_round_trip() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        let ledger = json!([
            {"user": "Participant 1", "text": "I feel unheard"},
            {"user": "Participant 2", "text": "I feel dismissed"}
        ]);
        store.set("AB12cd", &ledger).unwrap();
        store.set("generatedCode", &json!("AB12cd")).unwrap();
        store.set("settings", &json!({"nested": {"flag": true}})).unwrap();

        assert_eq!(store.get("AB12cd").unwrap(), Some(ledger));
        assert_eq!(store.get("generatedCode").unwrap(), Some(json!("AB12cd")));
        assert_eq!(
            store.get("settings").unwrap(),
            Some(json!({"nested": {"flag": true}}))
        );
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        store.set("generatedCode", &json!("AAAAAA")).unwrap();
        store.set("generatedCode", &json!("BBBBBB")).unwrap();

        assert_eq!(store.get("generatedCode").unwrap(), Some(json!("BBBBBB")));
        assert!(!dir.path().join("generatedCode.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_payload_is_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("AB12cd.json"), "{not json").unwrap();
        let store = FileSessionStore::new(dir.path());

        assert!(matches!(
            store.get("AB12cd"),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileSessionStore::new(&nested);

        store.set("AB12cd", &json!([])).unwrap();
        assert!(nested.join("AB12cd.json").exists());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        assert!(matches!(
            store.set("../escape", &json!(1)),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            store.get("../escape"),
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_quota_counts_all_keys() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path()).with_quota(20);

        // 12 bytes
        store.set("first", &json!("0123456789")).unwrap();
        let err = store.set("second", &json!("0123456789")).unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                required: 24,
                quota: 20,
                ..
            }
        ));
        assert_eq!(store.get("second").unwrap(), None);

        // Rewriting an existing key only counts its new size
        store.set("first", &json!("01234567890123456")).unwrap();
    }
}
