//! Statement ledger
//!
//! Append-only, per-code log of participant statements, persisted through a
//! [`SessionStore`] under the session code as key.
//!
//! # Concurrency
//!
//! `append` is a read-modify-write over the store and is not atomic. Two
//! writers on the same code (for example two processes pointed at the same
//! data directory) can each read the same sequence, append, and overwrite one
//! another, silently dropping a statement. The system assumes a single actor
//! per store and does not lock.

use crate::ports::ledger_observer::LedgerObserver;
use crate::ports::session_store::{SessionStore, SessionStoreExt, StorageError};
use resolver_domain::{
    ErrorKind, Participant, SessionCode, Statement, ValidationError, latest_by, preview,
};
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while appending to the ledger
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::Validation(_) => ErrorKind::Validation,
            LedgerError::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Per-code statement log
pub struct StatementLedger<S: SessionStore + ?Sized> {
    store: Arc<S>,
    observers: RwLock<Vec<Arc<dyn LedgerObserver>>>,
}

impl<S: SessionStore + ?Sized> StatementLedger<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Register an observer for "ledger changed" events.
    pub fn subscribe(&self, observer: Arc<dyn LedgerObserver>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Append a statement to the ledger for `code`.
    ///
    /// Rejects blank text with [`ValidationError::EmptyStatement`] before
    /// touching the store. On success every observer is notified with the
    /// sequence that was written.
    pub fn append(&self, code: &SessionCode, statement: Statement) -> Result<(), LedgerError> {
        statement.validate()?;

        let mut statements = self.get_all(code)?;
        debug!(
            "Appending statement by {} to {} ({} existing): {}",
            statement.participant,
            code,
            statements.len(),
            preview(&statement.text, 40)
        );
        statements.push(statement);
        self.store.set_json(code.as_str(), &statements)?;

        self.notify(code, &statements);
        Ok(())
    }

    /// Build and append a statement, returning what was stored.
    pub fn submit(
        &self,
        code: &SessionCode,
        participant: Participant,
        text: impl Into<String>,
    ) -> Result<Statement, LedgerError> {
        let statement = Statement::new(participant, text);
        self.append(code, statement.clone())?;
        Ok(statement)
    }

    /// All statements for `code` in insertion order.
    ///
    /// A code that was never written (or holds `null`) has no statements.
    /// Anything else that is not a statement array is reported as
    /// [`StorageError::Corrupt`].
    pub fn get_all(&self, code: &SessionCode) -> Result<Vec<Statement>, StorageError> {
        match self.store.get(code.as_str())? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => {
                serde_json::from_value(value).map_err(|e| StorageError::corrupt(code.as_str(), e))
            }
        }
    }

    /// Most recent statement by `participant`, if any.
    pub fn get_latest(
        &self,
        code: &SessionCode,
        participant: Participant,
    ) -> Result<Option<Statement>, StorageError> {
        let statements = self.get_all(code)?;
        Ok(latest_by(&statements, participant).cloned())
    }

    fn notify(&self, code: &SessionCode, statements: &[Statement]) {
        // Snapshot so observers may subscribe from inside the callback
        let observers = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for observer in observers {
            observer.on_ledger_changed(code, statements);
        }
    }
}
