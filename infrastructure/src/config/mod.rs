//! Configuration file loading for relationship-resolver
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RESOLVER_*` environment variables (`RESOLVER_SERVICE__BASE_URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./resolver.toml` or `./.resolver.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/relationship-resolver/config.toml`
//! 5. Fallback: `~/.config/relationship-resolver/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_QUOTA_BYTES, FileConfig, FileOutputConfig, FileServiceConfig,
    FileStorageConfig,
};
pub use loader::ConfigLoader;
