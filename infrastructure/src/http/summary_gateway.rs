//! HTTP adapter for the summarization service
//!
//! Posts the request body as JSON and hands back the raw status and body.
//! Classification of the reply is left to the application layer.

use crate::config::FileServiceConfig;
use async_trait::async_trait;
use resolver_application::{GatewayError, GatewayReply, SummaryGateway};
use resolver_domain::SummaryRequest;
use std::time::Duration;
use tracing::{debug, warn};

/// Gateway that reaches the summarization service over HTTP
pub struct HttpSummaryGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpSummaryGateway {
    /// Create a gateway posting to `url`.
    ///
    /// With `timeout` unset, requests wait as long as the transport allows.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(format!("failed to build client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Create a gateway from the `[service]` config section.
    pub fn from_config(config: &FileServiceConfig) -> Result<Self, GatewayError> {
        Self::new(config.endpoint_url(), config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SummaryGateway for HttpSummaryGateway {
    async fn summarize(&self, request: &SummaryRequest) -> Result<GatewayReply, GatewayError> {
        debug!("POST {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", self.url, e);
                transport_error(e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        debug!("Summarization service answered {} ({} bytes)", status, body.len());

        Ok(GatewayReply::new(status, body))
    }
}

fn transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_connect() {
        GatewayError::ConnectionError(err.to_string())
    } else {
        GatewayError::NoResponse(err.to_string())
    }
}
