//! Session store adapters
//!
//! - [`FileSessionStore`]: one JSON file per key under a data directory
//! - [`InMemorySessionStore`]: process-local map, for tests and `--ephemeral` runs

mod file_store;
mod memory_store;

pub use file_store::FileSessionStore;
pub use memory_store::InMemorySessionStore;

use resolver_application::StorageError;

/// Keys become file names, so they are limited to `[A-Za-z0-9_-]`.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
