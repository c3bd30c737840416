//! Summarization gate
//!
//! Decides whether the summarize action is available for a code: both
//! participants must have at least one statement. The gate keeps no state;
//! callers re-evaluate it whenever the ledger changes.

use crate::ports::ledger_observer::LedgerObserver;
use crate::ports::session_store::{SessionStore, StorageError};
use crate::ports::ui_event::UiEvent;
use crate::use_cases::statement_ledger::StatementLedger;
use resolver_domain::{Participant, SessionCode, Statement, latest_by};
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc;
use tracing::debug;

/// Readiness predicate over ledger contents
pub struct SummarizationGate;

impl SummarizationGate {
    /// Latest statements of participant 1 and participant 2, if both exist.
    pub fn latest_pair(statements: &[Statement]) -> Option<(&Statement, &Statement)> {
        let first = latest_by(statements, Participant::One)?;
        let second = latest_by(statements, Participant::Two)?;
        Some((first, second))
    }

    /// Readiness of an already loaded sequence.
    pub fn evaluate(statements: &[Statement]) -> bool {
        Self::latest_pair(statements).is_some()
    }

    /// Readiness of the ledger for `code`, read fresh from the store.
    pub fn is_ready<S: SessionStore + ?Sized>(
        ledger: &StatementLedger<S>,
        code: &SessionCode,
    ) -> Result<bool, StorageError> {
        Ok(Self::evaluate(&ledger.get_all(code)?))
    }
}

/// Ledger observer that re-evaluates the gate for the active code and
/// forwards the result to the presentation layer.
pub struct ReadinessNotifier {
    watched: Mutex<Option<SessionCode>>,
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl ReadinessNotifier {
    pub fn new(tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        Self {
            watched: Mutex::new(None),
            tx,
        }
    }

    /// Follow `code` from now on; events for other codes are ignored.
    pub fn watch(&self, code: Option<SessionCode>) {
        *self.watched.lock().unwrap_or_else(PoisonError::into_inner) = code;
    }

    fn is_watching(&self, code: &SessionCode) -> bool {
        self.watched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            == Some(code)
    }
}

impl LedgerObserver for ReadinessNotifier {
    fn on_ledger_changed(&self, code: &SessionCode, statements: &[Statement]) {
        if !self.is_watching(code) {
            debug!("Ignoring ledger change for inactive code {}", code);
            return;
        }

        let ready = SummarizationGate::evaluate(statements);
        // The receiver may already be gone during shutdown
        let _ = self.tx.send(UiEvent::LedgerChanged {
            code: code.clone(),
            statements: statements.len(),
        });
        let _ = self.tx.send(UiEvent::ReadinessChanged {
            code: code.clone(),
            ready,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MemoryStore;
    use std::sync::Arc;

    fn code() -> SessionCode {
        SessionCode::parse("AB12cd").unwrap()
    }

    #[test]
    fn test_not_ready_until_both_participants_spoke() {
        let ledger = StatementLedger::new(Arc::new(MemoryStore::new()));
        assert!(!SummarizationGate::is_ready(&ledger, &code()).unwrap());

        ledger.submit(&code(), Participant::One, "I feel unheard").unwrap();
        ledger.submit(&code(), Participant::One, "Still unheard").unwrap();
        assert!(!SummarizationGate::is_ready(&ledger, &code()).unwrap());

        ledger.submit(&code(), Participant::Two, "I feel dismissed").unwrap();
        assert!(SummarizationGate::is_ready(&ledger, &code()).unwrap());
    }

    #[test]
    fn test_stays_ready_after_more_statements() {
        let ledger = StatementLedger::new(Arc::new(MemoryStore::new()));
        ledger.submit(&code(), Participant::Two, "x").unwrap();
        ledger.submit(&code(), Participant::One, "y").unwrap();

        for i in 0..5 {
            ledger
                .submit(&code(), Participant::One, format!("more {}", i))
                .unwrap();
            assert!(SummarizationGate::is_ready(&ledger, &code()).unwrap());
        }
    }

    #[test]
    fn test_corrupt_ledger_is_an_error_not_false() {
        let store = Arc::new(MemoryStore::new());
        store.insert_raw("AB12cd", "[{]");
        let ledger = StatementLedger::new(store);
        assert!(SummarizationGate::is_ready(&ledger, &code()).is_err());
    }

    #[test]
    fn test_latest_pair_picks_latest_of_each() {
        let statements = vec![
            Statement::new(Participant::One, "a"),
            Statement::new(Participant::Two, "b"),
            Statement::new(Participant::One, "c"),
        ];
        let (first, second) = SummarizationGate::latest_pair(&statements).unwrap();
        assert_eq!(first.text, "c");
        assert_eq!(second.text, "b");
    }

    #[test]
    fn test_notifier_recomputes_on_each_change() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notifier = Arc::new(ReadinessNotifier::new(tx));
        notifier.watch(Some(code()));

        let ledger = StatementLedger::new(Arc::new(MemoryStore::new()));
        ledger.subscribe(notifier.clone());

        ledger.submit(&code(), Participant::One, "a").unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::LedgerChanged {
                code: code(),
                statements: 1
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::ReadinessChanged {
                code: code(),
                ready: false
            }
        );

        ledger.submit(&code(), Participant::Two, "b").unwrap();
        let _ = rx.try_recv().unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::ReadinessChanged {
                code: code(),
                ready: true
            }
        );
    }

    #[test]
    fn test_notifier_ignores_other_codes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notifier = Arc::new(ReadinessNotifier::new(tx));
        notifier.watch(Some(code()));

        let ledger = StatementLedger::new(Arc::new(MemoryStore::new()));
        ledger.subscribe(notifier);

        let other = SessionCode::parse("other1").unwrap();
        ledger.submit(&other, Participant::One, "a").unwrap();
        assert!(rx.try_recv().is_err());
    }
    #[test]
    fn test_notifier_keeps_watching_after_poisoned_lock() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notifier = Arc::new(ReadinessNotifier::new(tx));

        let poisoner = notifier.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.watched.lock().unwrap();
            panic!("poison the watched code");
        })
        .join();
        assert!(notifier.watched.is_poisoned());

        notifier.watch(Some(code()));
        let ledger = StatementLedger::new(Arc::new(MemoryStore::new()));
        ledger.subscribe(notifier);

        ledger.submit(&code(), Participant::One, "a").unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::LedgerChanged {
                code: code(),
                statements: 1
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::ReadinessChanged {
                code: code(),
                ready: false
            }
        );
    }
}
