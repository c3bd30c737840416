//! Summarization exchange value objects.
//!
//! An exchange is transient: it exists for one user-triggered round trip
//! and is never persisted.
//!
//! ```text
//! POST /api/ai-summarize
//!   → {"user1Statement": "...", "user2Statement": "...", "code": "AB12cd"}
//!   ← 2xx {"aiResponse": "..."}
//!   ← 4xx/5xx {"errorMessage": "..."}
//! ```

use crate::session::code::SessionCode;
use serde::{Deserialize, Serialize};

/// Correlation token for one summarization exchange.
///
/// Issued in increasing order by the client; a response whose id is no
/// longer the one in flight is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Request body for the summarization endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub user1_statement: String,
    pub user2_statement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<SessionCode>,
}

impl SummaryRequest {
    pub fn new(user1_statement: impl Into<String>, user2_statement: impl Into<String>) -> Self {
        Self {
            user1_statement: user1_statement.into(),
            user2_statement: user2_statement.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: SessionCode) -> Self {
        self.code = Some(code);
        self
    }
}

/// Body of a 2xx response.
///
/// `aiResponse` is optional here so a malformed reply can be told apart from
/// an unparseable one by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReply {
    #[serde(default)]
    pub ai_response: Option<String>,
}

impl SummaryReply {
    /// The summary text, if present and non-empty.
    pub fn result(&self) -> Option<&str> {
        self.ai_response.as_deref().filter(|s| !s.is_empty())
    }
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub error_message: Option<String>,
}
