//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default quota over all stored payloads (5 MiB)
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding one JSON file per key
    pub data_dir: Option<PathBuf>,
    /// Maximum total bytes of stored payloads
    pub quota_bytes: u64,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}

impl FileStorageConfig {
    /// Configured data directory, or `$XDG_DATA_HOME/relationship-resolver`.
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("relationship-resolver")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = FileStorageConfig {
            data_dir: Some(PathBuf::from("/tmp/resolver")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_data_dir(),
            Some(PathBuf::from("/tmp/resolver"))
        );
    }
}
