//! Session controller
//!
//! Owns the active session code and wires the ledger, the readiness
//! notifier and the summarization client together for one user-facing
//! session. Everything observable is emitted as a [`UiEvent`].
//!
//! The current code is persisted under [`CURRENT_CODE_KEY`]; transient
//! summarization state is not.

use crate::config::BehaviorConfig;
use crate::ports::session_store::{SessionStore, SessionStoreExt, StorageError};
use crate::ports::summary_gateway::SummaryGateway;
use crate::ports::ui_event::UiEvent;
use crate::use_cases::statement_ledger::{LedgerError, StatementLedger};
use crate::use_cases::summarization_gate::{ReadinessNotifier, SummarizationGate};
use crate::use_cases::summarize::{Settlement, SummarizationClient, SummarizeError};
use resolver_domain::{
    ErrorKind, Participant, RequestId, SessionCode, Statement, SummarizationState,
    ValidationError,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Store key holding the current session code.
pub const CURRENT_CODE_KEY: &str = "generatedCode";

/// Errors returned by [`SessionController`] operations
#[derive(Error, Debug)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Summarize(#[from] SummarizeError),
}

impl ControllerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ControllerError::Validation(_) => ErrorKind::Validation,
            ControllerError::Storage(_) => ErrorKind::Storage,
            ControllerError::Summarize(e) => e.kind(),
        }
    }
}

impl From<LedgerError> for ControllerError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Validation(e) => ControllerError::Validation(e),
            LedgerError::Storage(e) => ControllerError::Storage(e),
        }
    }
}

/// One participant-facing session over a shared store
pub struct SessionController<S: SessionStore + ?Sized + 'static, G: SummaryGateway + 'static> {
    store: Arc<S>,
    ledger: Arc<StatementLedger<S>>,
    client: Arc<SummarizationClient<S, G>>,
    readiness: Arc<ReadinessNotifier>,
    code: Option<SessionCode>,
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl<S: SessionStore + ?Sized + 'static, G: SummaryGateway + 'static> SessionController<S, G> {
    pub fn new(
        store: Arc<S>,
        gateway: Arc<G>,
        config: BehaviorConfig,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        let ledger = Arc::new(StatementLedger::new(store.clone()));
        let readiness = Arc::new(ReadinessNotifier::new(tx.clone()));
        ledger.subscribe(readiness.clone());

        let client = Arc::new(
            SummarizationClient::new(ledger.clone(), gateway, config).with_events(tx.clone()),
        );

        Self {
            store,
            ledger,
            client,
            readiness,
            code: None,
            tx,
        }
    }

    /// Load the persisted current code, if any, and make it active.
    ///
    /// An empty string or `null` under [`CURRENT_CODE_KEY`] means no code.
    /// Resuming a code is silent: no `CodeChanged` or `ReadinessChanged` is
    /// emitted, since nothing changed from the user's point of view.
    pub fn restore(&mut self) -> Result<Option<SessionCode>, ControllerError> {
        let stored = self
            .store
            .get_json::<Option<String>>(CURRENT_CODE_KEY)?
            .flatten()
            .filter(|raw| !raw.trim().is_empty());

        let Some(raw) = stored else {
            info!("No session code stored");
            return Ok(None);
        };

        let code = SessionCode::parse(&raw)
            .map_err(|e| StorageError::corrupt(CURRENT_CODE_KEY, e))?;
        info!("Restored session code {}", code);
        self.resume(code.clone());
        Ok(Some(code))
    }

    /// Generate a fresh code, persist it and make it active.
    pub fn generate_code(&mut self) -> Result<SessionCode, ControllerError> {
        let code = SessionCode::generate();
        self.persist(&code)?;
        info!("Generated session code {}", code);
        self.activate(code.clone());
        Ok(code)
    }

    /// Validate a manually entered code, persist it and make it active.
    pub fn enter_code(&mut self, raw: &str) -> Result<SessionCode, ControllerError> {
        let code = SessionCode::parse(raw)?;
        self.persist(&code)?;
        info!("Joined session code {}", code);
        self.activate(code.clone());
        Ok(code)
    }

    pub fn current_code(&self) -> Option<&SessionCode> {
        self.code.as_ref()
    }

    /// Append a statement for `participant` under the active code.
    pub fn submit(
        &self,
        participant: Participant,
        text: &str,
    ) -> Result<Statement, ControllerError> {
        let code = self.require_code()?;
        Ok(self.ledger.submit(code, participant, text)?)
    }

    /// All statements for the active code, oldest first.
    pub fn statements(&self) -> Result<Vec<Statement>, ControllerError> {
        let code = self.require_code()?;
        Ok(self.ledger.get_all(code)?)
    }

    /// Most recent statement by `participant` under the active code.
    pub fn latest(&self, participant: Participant) -> Result<Option<Statement>, ControllerError> {
        let code = self.require_code()?;
        Ok(self.ledger.get_latest(code, participant)?)
    }

    /// Whether the summarize action is available. `false` with no code.
    pub fn is_ready(&self) -> Result<bool, ControllerError> {
        match &self.code {
            Some(code) => Ok(SummarizationGate::is_ready(&self.ledger, code)?),
            None => Ok(false),
        }
    }

    pub fn summary_state(&self) -> SummarizationState {
        self.client.state()
    }

    /// Run one summarization exchange to completion.
    pub async fn summarize(&self) -> Result<Settlement, ControllerError> {
        let code = self.require_code()?.clone();
        Ok(self.client.summarize(&code).await?)
    }

    /// Start a summarization exchange in the background.
    pub fn trigger_summary(
        &self,
    ) -> Result<(RequestId, JoinHandle<Settlement>), ControllerError> {
        let code = self.require_code()?;
        Ok(self.client.trigger(code)?)
    }

    fn require_code(&self) -> Result<&SessionCode, ValidationError> {
        self.code.as_ref().ok_or(ValidationError::NoActiveCode)
    }

    fn persist(&self, code: &SessionCode) -> Result<(), StorageError> {
        self.store.set_json(CURRENT_CODE_KEY, code.as_str())
    }

    fn resume(&mut self, code: SessionCode) {
        self.client.reset();
        self.readiness.watch(Some(code.clone()));
        self.code = Some(code);
    }

    /// Switch to `code` and announce it along with its readiness.
    fn activate(&mut self, code: SessionCode) {
        self.resume(code.clone());

        let _ = self.tx.send(UiEvent::CodeChanged { code: code.clone() });
        match SummarizationGate::is_ready(&self.ledger, &code) {
            Ok(ready) => {
                let _ = self.tx.send(UiEvent::ReadinessChanged { code, ready });
            }
            Err(e) => {
                warn!("Could not evaluate readiness for {}: {}", code, e);
                let _ = self.tx.send(UiEvent::Error {
                    kind: ErrorKind::Storage,
                    message: e.to_string(),
                });
            }
        }
    }
}
