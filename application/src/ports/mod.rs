//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod ledger_observer;
pub mod session_store;
pub mod summary_gateway;
pub mod ui_event;
