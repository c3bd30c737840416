//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types at the
//! composition root.

mod output;
mod service;
mod storage;

pub use output::FileOutputConfig;
pub use service::FileServiceConfig;
pub use storage::{DEFAULT_QUOTA_BYTES, FileStorageConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("service.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("service.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("storage.quota_bytes cannot be 0")]
    InvalidQuota,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Summarization service settings
    pub service: FileServiceConfig,
    /// Local persistence settings
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Timeout of 0 seconds doesn't make sense
        if let Some(0) = self.service.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.service.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        if self.storage.quota_bytes == 0 {
            return Err(ConfigValidationError::InvalidQuota);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[service]
base_url = "https://resolver.example.com"
endpoint = "/api/v2/summarize"
timeout_seconds = 45
include_code = false

[storage]
data_dir = "/var/lib/resolver"
quota_bytes = 1024

[output]
color = false
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.base_url, "https://resolver.example.com");
        assert_eq!(config.service.endpoint, "/api/v2/summarize");
        assert_eq!(config.service.timeout_seconds, Some(45));
        assert!(!config.service.include_code);
        assert_eq!(
            config.storage.data_dir.as_deref(),
            Some(std::path::Path::new("/var/lib/resolver"))
        );
        assert_eq!(config.storage.quota_bytes, 1024);
        assert!(!config.output.color);
        assert!(!config.output.show_progress);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[service]
timeout_seconds = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.timeout_seconds, Some(10));
        // Defaults should apply
        assert_eq!(config.service.base_url, "http://localhost:3000");
        assert_eq!(config.service.endpoint, "/api/ai-summarize");
        assert!(config.service.include_code);
        assert_eq!(config.storage.quota_bytes, 5 * 1024 * 1024);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.service.timeout_seconds, None);
        assert!(config.storage.data_dir.is_none());
        assert!(config.output.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[service]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_empty_base_url() {
        let toml_str = r#"
[service]
base_url = "  "
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyBaseUrl));
    }

    #[test]
    fn test_validate_zero_quota() {
        let toml_str = r#"
[storage]
quota_bytes = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidQuota));
    }
}
