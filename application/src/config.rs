//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as what goes into a summarization request. Transport settings (the
//! request timeout) belong to the gateway adapter.

/// Application behavior configuration.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Send the session code along with the two statements.
    pub include_code: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self { include_code: true }
    }
}

impl BehaviorConfig {
    /// Send only the two statements, without the session code.
    pub fn without_code(mut self) -> Self {
        self.include_code = false;
        self
    }
}
