//! Summary gateway port
//!
//! Defines the interface for reaching the remote summarization service.
//! The gateway only moves bytes: it reports the status and body it got back,
//! and classification into success or failure happens in the use case.

use async_trait::async_trait;
use resolver_domain::SummaryRequest;
use thiserror::Error;

/// Transport-level failures. All of them mean no usable response arrived.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("No response received: {0}")]
    NoResponse(String),
}

/// Raw HTTP outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    pub status: u16,
    pub body: String,
}

impl GatewayReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Gateway to the summarization service
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait SummaryGateway: Send + Sync {
    /// Send one request and return whatever the service answered.
    async fn summarize(&self, request: &SummaryRequest) -> Result<GatewayReply, GatewayError>;
}
