//! Ledger change notification port
//!
//! The ledger emits one event per successful append. Observers run
//! synchronously, on the caller's thread, before `append` returns.

use resolver_domain::{SessionCode, Statement};

/// Callback for ledger mutations
pub trait LedgerObserver: Send + Sync {
    /// Called after `statements` has been written for `code`.
    fn on_ledger_changed(&self, code: &SessionCode, statements: &[Statement]);
}

