//! Session store port
//!
//! Durable key-value persistence on the local device. Every other component
//! reads and writes through a [`SessionStore`] handed to it explicitly; there
//! is no ambient global store.
//!
//! Both operations are synchronous and complete before returning.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// The stored payload exists but is not valid data. Distinct from
    /// "never written", which is `Ok(None)`.
    #[error("Stored value for '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Storage quota exceeded writing '{key}': {required} bytes needed, {quota} allowed")]
    QuotaExceeded {
        key: String,
        required: u64,
        quota: u64,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    #[error("Cannot serialize value for '{key}': {reason}")]
    Serialization { key: String, reason: String },
}

impl StorageError {
    pub fn corrupt(key: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        StorageError::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

/// Key-value store holding JSON values.
///
/// Strings, arrays and plain objects must round-trip unchanged.
pub trait SessionStore: Send + Sync {
    /// Read the value under `key`.
    ///
    /// Returns `Ok(None)` when nothing was ever written, and
    /// [`StorageError::Corrupt`] when the payload cannot be parsed.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError>;
}

/// Typed access on top of any [`SessionStore`].
pub trait SessionStoreExt: SessionStore {
    /// Read and deserialize. A valid JSON value of the wrong shape is
    /// reported as corrupt.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get(key)? {
            None => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| StorageError::corrupt(key, e)),
        }
    }

    /// Serialize and write.
    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let value = serde_json::to_value(value).map_err(|e| StorageError::Serialization {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.set(key, &value)
    }
}

impl<S: SessionStore + ?Sized> SessionStoreExt for S {}
