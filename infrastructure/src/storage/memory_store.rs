//! In-memory session store

use super::validate_key;
use crate::config::DEFAULT_QUOTA_BYTES;
use resolver_application::{SessionStore, StorageError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Process-local store with the same quota semantics as the file store.
///
/// Payloads are kept serialized so quota accounting matches what would be
/// written to disk.
#[derive(Debug)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: u64,
    available: AtomicBool,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: DEFAULT_QUOTA_BYTES,
            available: AtomicBool::new(true),
        }
    }

    pub fn with_quota(mut self, quota_bytes: u64) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    /// Make every subsequent operation fail with [`StorageError::Unavailable`].
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Plant a raw payload, bypassing validation.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), raw.to_string());
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(StorageError::Unavailable(
                "in-memory store disabled".to_string(),
            ))
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        validate_key(key)?;
        self.check_available()?;

        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        match entries.get(key) {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StorageError::corrupt(key, e)),
        }
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        validate_key(key)?;
        self.check_available()?;

        let payload = value.to_string();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let others: u64 = entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(_, v)| v.len() as u64)
            .sum();
        let required = others + payload.len() as u64;
        if required > self.quota_bytes {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                required,
                quota: self.quota_bytes,
            });
        }

        debug!("Stored {} bytes under '{}'", payload.len(), key);
        entries.insert(key.to_string(), payload);
        Ok(())
    }
}
