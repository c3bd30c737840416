//! UI event types emitted for presentation layer rendering
//!
//! These events form the output port from the application layer to the presentation layer.
//! The presentation layer receives them on a channel and renders them.

use resolver_domain::{ErrorKind, RequestId, SessionCode};

/// Events emitted by the session controller, ledger observers and the
/// summarization client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // === Session Code ===
    /// A code was generated, entered, or restored
    CodeChanged { code: SessionCode },

    // === Ledger ===
    /// A statement was appended for the active code
    LedgerChanged { code: SessionCode, statements: usize },
    /// The summarize action became enabled or disabled
    ReadinessChanged { code: SessionCode, ready: bool },

    // === Summarization ===
    /// A request went out
    SummaryPending {
        request_id: RequestId,
        code: SessionCode,
    },
    /// The service produced a summary
    SummaryReady {
        request_id: RequestId,
        ai_response: String,
    },
    /// The exchange failed
    SummaryFailed {
        request_id: RequestId,
        kind: ErrorKind,
        message: String,
    },
    /// A response arrived for an exchange that is no longer current
    SummaryDiscarded { request_id: RequestId },

    // === Errors ===
    /// A background step failed and has no caller to return the error to
    Error { kind: ErrorKind, message: String },
}
