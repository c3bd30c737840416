//! Domain error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a user-facing failure.
///
/// Every failure in the system maps to exactly one of these. None of them is
/// fatal: the session code and the ledger are left untouched and the user
/// may retry the action that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Rejected input (empty statement, summarize before both statements exist)
    Validation,
    /// Persistence read/write failure
    Storage,
    /// The summarization request never reached the service, or no response came back
    Network,
    /// The service answered with an error or a malformed body
    Protocol,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Storage => "storage",
            ErrorKind::Network => "network",
            ErrorKind::Protocol => "protocol",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("statement cannot be empty")]
    EmptyStatement,

    #[error("both participants must submit a statement")]
    MissingStatements,

    #[error("invalid session code: {0}")]
    InvalidCode(String),

    #[error("no active session code, generate or join one first")]
    NoActiveCode,

    #[error("unknown participant: {0}")]
    UnknownParticipant(String),
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}
