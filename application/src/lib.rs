//! Application layer for relationship-resolver
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    ledger_observer::LedgerObserver,
    session_store::{SessionStore, SessionStoreExt, StorageError},
    summary_gateway::{GatewayError, GatewayReply, SummaryGateway},
    ui_event::UiEvent,
};
pub use use_cases::session_controller::{CURRENT_CODE_KEY, ControllerError, SessionController};
pub use use_cases::statement_ledger::{LedgerError, StatementLedger};
pub use use_cases::summarization_gate::{ReadinessNotifier, SummarizationGate};
pub use use_cases::summarize::{
    MISSING_RESULT, PendingExchange, Settlement, SummarizationClient, SummarizeError, classify,
};
