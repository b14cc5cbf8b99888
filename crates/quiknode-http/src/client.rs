//! HTTP JSON-RPC transport backed by `reqwest`.
//!
//! One request, one round-trip: failures surface as
//! [`TransportError::Http`] and are never retried here. QuickNode
//! endpoints authenticate through the URL token, so no headers beyond
//! `Content-Type: application/json` are required.

use std::time::Duration;

use async_trait::async_trait;

use quiknode_core::error::TransportError;
use quiknode_core::request::{JsonRpcRequest, JsonRpcResponse};
use quiknode_core::transport::RpcTransport;

/// Configuration for [`HttpRpcClient`].
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub request_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP JSON-RPC client for a single endpoint URL.
pub struct HttpRpcClient {
    url: String,
    http: reqwest::Client,
}

impl HttpRpcClient {
    /// Create a new client for the given JSON-RPC endpoint URL.
    pub fn new(url: impl Into<String>, config: HttpClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("failed to build reqwest client");

        Self {
            url: url.into(),
            http,
        }
    }

    /// Create with default configuration.
    pub fn default_for(url: impl Into<String>) -> Self {
        Self::new(url, HttpClientConfig::default())
    }
}

#[async_trait]
impl RpcTransport for HttpRpcClient {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        tracing::debug!(method = %req.method, id = %req.id, "sending JSON-RPC request");

        let resp = self
            .http
            .post(&self.url)
            .json(&req)
            .send()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "JSON-RPC endpoint returned HTTP error");
            return Err(TransportError::Http(format!("HTTP {status}: {body}")));
        }

        resp.json::<JsonRpcResponse>()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))
    }

    fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeout_is_thirty_seconds() {
        assert_eq!(
            HttpClientConfig::default().request_timeout,
            Duration::from_secs(30)
        );
    }

    #[test]
    fn client_reports_its_url() {
        let client = HttpRpcClient::default_for("https://foo.quiknode.pro/token/");
        assert_eq!(client.url(), "https://foo.quiknode.pro/token/");
    }
}
