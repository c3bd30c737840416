//! Summarization client
//!
//! Drives one round trip to the summarization service and tracks its outcome
//! as a [`SummarizationState`]:
//!
//! ```text
//! Idle/Success/Failed ──begin()──► Pending ──complete()──► Success | Failed
//! ```
//!
//! There is a single in-flight slot. Beginning a new exchange while one is
//! pending supersedes it: the older exchange keeps running, but its response
//! is discarded when it arrives. [`SummarizationClient::reset`] does the same
//! without starting a new exchange (used when the session code changes).
//!
//! Nothing is retried automatically.

use crate::config::BehaviorConfig;
use crate::ports::session_store::{SessionStore, StorageError};
use crate::ports::summary_gateway::{GatewayError, GatewayReply, SummaryGateway};
use crate::ports::ui_event::UiEvent;
use crate::use_cases::statement_ledger::StatementLedger;
use crate::use_cases::summarization_gate::SummarizationGate;
use resolver_domain::{
    ErrorKind, RequestId, ServiceErrorBody, SessionCode, SummarizationState, SummaryReply,
    SummaryRequest, ValidationError, preview,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Message used when a 2xx response carries no usable `aiResponse`.
pub const MISSING_RESULT: &str = "response missing result";

/// Errors that can occur during summarization
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Protocol(String),
}

impl SummarizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummarizeError::Validation(_) => ErrorKind::Validation,
            SummarizeError::Storage(_) => ErrorKind::Storage,
            SummarizeError::Network(_) => ErrorKind::Network,
            SummarizeError::Protocol(_) => ErrorKind::Protocol,
        }
    }
}

/// Classify a gateway outcome.
///
/// First match wins:
/// 1. no response at all → `Network`
/// 2. non-2xx → `Protocol`, with the service's `errorMessage` when it sent one
/// 3. 2xx without a non-empty `aiResponse` string → `Protocol` ([`MISSING_RESULT`])
pub fn classify(outcome: Result<GatewayReply, GatewayError>) -> Result<String, SummarizeError> {
    let reply = outcome.map_err(|e| {
        SummarizeError::Network(format!("could not reach the summarization service: {}", e))
    })?;

    if !reply.is_success() {
        let message = serde_json::from_str::<ServiceErrorBody>(&reply.body)
            .ok()
            .and_then(|body| body.error_message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("request failed with status {}", reply.status));
        return Err(SummarizeError::Protocol(message));
    }

    serde_json::from_str::<SummaryReply>(&reply.body)
        .ok()
        .and_then(|body| body.result().map(str::to_string))
        .ok_or_else(|| SummarizeError::Protocol(MISSING_RESULT.to_string()))
}

/// An exchange that has entered `Pending` but not yet been sent.
///
/// Holds the snapshot of the two statements taken at trigger time; the ledger
/// is not read again for this exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingExchange {
    pub request_id: RequestId,
    pub code: SessionCode,
    pub request: SummaryRequest,
}

/// What happened to a response once it came back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The response belonged to the current exchange and produced this state
    Applied(SummarizationState),
    /// The exchange had been superseded or reset; the response was dropped
    Discarded { request_id: RequestId },
}

struct ExchangeSlot {
    state: SummarizationState,
    in_flight: Option<RequestId>,
    last_issued: RequestId,
}

/// Client for the summarization service
pub struct SummarizationClient<S: SessionStore + ?Sized + 'static, G: SummaryGateway + 'static> {
    ledger: Arc<StatementLedger<S>>,
    gateway: Arc<G>,
    config: BehaviorConfig,
    slot: Mutex<ExchangeSlot>,
    tx: Option<mpsc::UnboundedSender<UiEvent>>,
}

impl<S: SessionStore + ?Sized + 'static, G: SummaryGateway + 'static> SummarizationClient<S, G> {
    pub fn new(ledger: Arc<StatementLedger<S>>, gateway: Arc<G>, config: BehaviorConfig) -> Self {
        Self {
            ledger,
            gateway,
            config,
            slot: Mutex::new(ExchangeSlot {
                state: SummarizationState::Idle,
                in_flight: None,
                last_issued: RequestId::new(0),
            }),
            tx: None,
        }
    }

    /// Emit state changes as [`UiEvent`]s.
    pub fn with_events(mut self, tx: mpsc::UnboundedSender<UiEvent>) -> Self {
        self.tx = Some(tx);
        self
    }

    /// Current state of the slot.
    pub fn state(&self) -> SummarizationState {
        self.slot().state.clone()
    }

    /// Check the gate, snapshot both statements, and enter `Pending`.
    ///
    /// Fails without any state change when either participant has no
    /// statement yet, or when the ledger cannot be read.
    pub fn begin(&self, code: &SessionCode) -> Result<PendingExchange, SummarizeError> {
        let statements = self.ledger.get_all(code)?;
        let Some((first, second)) = SummarizationGate::latest_pair(&statements) else {
            warn!("Summarize requested for {} before both statements exist", code);
            return Err(ValidationError::MissingStatements.into());
        };

        let mut request = SummaryRequest::new(first.text.clone(), second.text.clone());
        if self.config.include_code {
            request = request.with_code(code.clone());
        }

        let request_id = {
            let mut slot = self.slot();
            let request_id = slot.last_issued.next();
            slot.last_issued = request_id;
            if let Some(previous) = slot.in_flight.replace(request_id) {
                info!("Request {} superseded by {}", previous, request_id);
            }
            slot.state = SummarizationState::Pending { request_id };
            request_id
        };

        info!(
            "Summarization {} pending for {}: \"{}\" / \"{}\"",
            request_id,
            code,
            preview(&request.user1_statement, 40),
            preview(&request.user2_statement, 40)
        );
        self.emit(UiEvent::SummaryPending {
            request_id,
            code: code.clone(),
        });

        Ok(PendingExchange {
            request_id,
            code: code.clone(),
            request,
        })
    }

    /// Send a pending exchange and settle its outcome.
    pub async fn complete(&self, exchange: PendingExchange) -> Settlement {
        debug!("Sending summarization request {}", exchange.request_id);
        let outcome = classify(self.gateway.summarize(&exchange.request).await);
        self.settle(exchange.request_id, outcome)
    }

    /// Begin and complete in one awaited call.
    ///
    /// Returns `Err` only when the exchange could not start; network and
    /// protocol failures end up in the returned [`Settlement`].
    pub async fn summarize(&self, code: &SessionCode) -> Result<Settlement, SummarizeError> {
        let exchange = self.begin(code)?;
        Ok(self.complete(exchange).await)
    }

    /// Begin an exchange and complete it on a spawned task.
    ///
    /// Returns as soon as the request is pending. Must be called from within
    /// a tokio runtime.
    pub fn trigger(
        self: &Arc<Self>,
        code: &SessionCode,
    ) -> Result<(RequestId, JoinHandle<Settlement>), SummarizeError> {
        let exchange = self.begin(code)?;
        let request_id = exchange.request_id;
        let client = Arc::clone(self);
        let handle = tokio::spawn(async move { client.complete(exchange).await });
        Ok((request_id, handle))
    }

    /// Return to `Idle`, discarding whatever is in flight.
    pub fn reset(&self) {
        let mut slot = self.slot();
        if let Some(request_id) = slot.in_flight.take() {
            info!("Request {} will be discarded", request_id);
        }
        slot.state = SummarizationState::Idle;
    }

    fn settle(
        &self,
        request_id: RequestId,
        outcome: Result<String, SummarizeError>,
    ) -> Settlement {
        let state = {
            let mut slot = self.slot();
            if slot.in_flight != Some(request_id) {
                drop(slot);
                warn!("Discarding response for stale request {}", request_id);
                self.emit(UiEvent::SummaryDiscarded { request_id });
                return Settlement::Discarded { request_id };
            }
            slot.in_flight = None;
            slot.state = match outcome {
                Ok(ai_response) => SummarizationState::Success { ai_response },
                Err(e) => SummarizationState::Failed {
                    kind: e.kind(),
                    message: e.to_string(),
                },
            };
            slot.state.clone()
        };

        match &state {
            SummarizationState::Success { ai_response } => {
                info!("Summarization {} succeeded", request_id);
                self.emit(UiEvent::SummaryReady {
                    request_id,
                    ai_response: ai_response.clone(),
                });
            }
            SummarizationState::Failed { kind, message } => {
                warn!("Summarization {} failed ({}): {}", request_id, kind, message);
                self.emit(UiEvent::SummaryFailed {
                    request_id,
                    kind: *kind,
                    message: message.clone(),
                });
            }
            SummarizationState::Idle | SummarizationState::Pending { .. } => {}
        }

        Settlement::Applied(state)
    }

    fn slot(&self) -> MutexGuard<'_, ExchangeSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: UiEvent) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(event);
        }
    }
}
