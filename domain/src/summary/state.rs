//! Summarization state machine

use crate::core::error::ErrorKind;
use crate::summary::exchange::RequestId;

/// Where the current summarization exchange stands.
///
/// ```text
/// Idle ──trigger──► Pending ──► Success(aiResponse)
///  ▲                  │    └──► Failed(kind, message)
///  └──── reset ───────┴─────────────┘   (any state may trigger again)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummarizationState {
    /// Nothing requested yet, or reset after a code change
    #[default]
    Idle,
    /// A request is in flight
    Pending { request_id: RequestId },
    /// The service produced a summary
    Success { ai_response: String },
    /// The exchange failed (network or protocol)
    Failed { kind: ErrorKind, message: String },
}

impl SummarizationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummarizationState::Idle => "idle",
            SummarizationState::Pending { .. } => "pending",
            SummarizationState::Success { .. } => "success",
            SummarizationState::Failed { .. } => "failed",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SummarizationState::Pending { .. })
    }

    pub fn ai_response(&self) -> Option<&str> {
        match self {
            SummarizationState::Success { ai_response } => Some(ai_response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<(ErrorKind, &str)> {
        match self {
            SummarizationState::Failed { kind, message } => Some((*kind, message)),
            _ => None,
        }
    }
}

impl std::fmt::Display for SummarizationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
