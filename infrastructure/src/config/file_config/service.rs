//! Summarization service configuration from TOML (`[service]` section)

use resolver_application::BehaviorConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Origin of the summarization service
    pub base_url: String,
    /// Path of the summarize endpoint
    pub endpoint: String,
    /// Timeout in seconds for the request (none = transport default)
    pub timeout_seconds: Option<u64>,
    /// Send the session code with each request
    pub include_code: bool,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            endpoint: "/api/ai-summarize".to_string(),
            timeout_seconds: None,
            include_code: true,
        }
    }
}

impl FileServiceConfig {
    /// Full URL of the summarize endpoint.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }

    /// Request timeout for the gateway, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Convert to the application's behavior settings.
    pub fn to_behavior(&self) -> BehaviorConfig {
        if self.include_code {
            BehaviorConfig::default()
        } else {
            BehaviorConfig::default().without_code()
        }
    }
}
