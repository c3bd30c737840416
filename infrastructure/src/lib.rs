//! Infrastructure layer for relationship-resolver
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileServiceConfig,
    FileStorageConfig,
};
pub use http::HttpSummaryGateway;
pub use storage::{FileSessionStore, InMemorySessionStore};
