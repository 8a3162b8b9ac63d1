//! Transport abstraction
//!
//! The client only needs "send this request, give me the response". The
//! production implementation is `reqwest`; tests plug in their own.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::{InboundResponse, OutboundRequest};

/// Sends an [`OutboundRequest`] and returns the raw response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> ClientResult<InboundResponse>;
}

/// [`Transport`] backed by a `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client with the configured timeout and user agent
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> ClientResult<InboundResponse> {
        let (method, url, headers, mut body) = request.into_parts();
        let bytes = body.read_all()?;

        tracing::debug!("Sending {} {} ({} bytes)", method, url, bytes.len());

        let response = self
            .client
            .request(method, url)
            .headers(headers)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        tracing::debug!("Received {} ({} bytes)", status, bytes.len());

        Ok(InboundResponse::new(status, bytes.to_vec()).with_headers(headers))
    }
}
