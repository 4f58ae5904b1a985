//! Transport layer for A2A client communication.
//!
//! Provides the `Transport` trait for abstracting over how JSON-RPC frames
//! reach the agent, and `JsonRpcTransport` for the standard JSON-RPC over
//! HTTP binding.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{A2AError, A2AResult};
use crate::types::{JsonRpcRequest, JsonRpcResponse};

/// Transport abstraction for A2A communication.
///
/// Implementations handle the low-level details of sending JSON-RPC requests
/// and receiving responses over a particular protocol binding.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a JSON-RPC request and receive a JSON-RPC response.
    async fn send(&self, request: &JsonRpcRequest) -> A2AResult<JsonRpcResponse>;

    /// Close the transport and release any held resources.
    ///
    /// The default implementation is a no-op.
    async fn close(&self) -> A2AResult<()> {
        Ok(())
    }
}

/// HTTP settings shared by agent card discovery and JSON-RPC calls.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request timeout. Defaults to 60 seconds.
    pub timeout: Duration,
    /// Additional HTTP headers to include on every request.
    pub headers: HashMap<String, String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            headers: HashMap::new(),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` that applies this configuration to every
    /// request it sends.
    ///
    /// # Errors
    ///
    /// Returns [`A2AError::InvalidConfig`] if a header name or value is not
    /// valid HTTP, or if the client cannot be constructed.
    pub fn build_http_client(&self) -> A2AResult<reqwest::Client> {
        let mut default_headers = HeaderMap::new();
        for (key, value) in &self.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| A2AError::InvalidConfig(format!("invalid header name '{key}': {e}")))?;
            let val = HeaderValue::from_str(value).map_err(|e| {
                A2AError::InvalidConfig(format!("invalid value for header '{key}': {e}"))
            })?;
            default_headers.insert(name, val);
        }

        reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| A2AError::InvalidConfig(format!("failed to build HTTP client: {e}")))
    }
}

/// JSON-RPC over HTTP transport using `reqwest`.
///
/// Sends POST requests with `Content-Type: application/json` and parses the
/// body as a JSON-RPC response.
///
/// # Example
///
/// ```no_run
/// use a2ui_client::client::JsonRpcTransport;
///
/// let transport = JsonRpcTransport::new("http://localhost:10002/");
/// ```
#[derive(Debug, Clone)]
pub struct JsonRpcTransport {
    client: reqwest::Client,
    url: String,
}

impl JsonRpcTransport {
    /// Create a new transport targeting the given A2A endpoint URL.
    ///
    /// Uses a default `reqwest::Client` (no timeout, no extra headers).
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Create a new transport with custom configuration.
    pub fn with_config(url: impl Into<String>, config: &TransportConfig) -> A2AResult<Self> {
        Ok(Self::with_client(url, config.build_http_client()?))
    }

    /// Create a new transport with an existing `reqwest::Client`.
    ///
    /// The client is shared with card discovery so both carry the same
    /// default headers.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Returns the URL this transport sends requests to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transport for JsonRpcTransport {
    async fn send(&self, request: &JsonRpcRequest) -> A2AResult<JsonRpcResponse> {
        let body = serde_json::to_vec(request).map_err(|e| {
            A2AError::Transport(format!("failed to serialize JSON-RPC request: {e}"))
        })?;

        tracing::debug!("sending {} to {}", request.method, self.url);

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    A2AError::Timeout(format!("request timed out: {e}"))
                } else if e.is_connect() {
                    A2AError::Transport(format!("connection failed: {e}"))
                } else {
                    A2AError::Transport(format!("HTTP request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(A2AError::Http {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| A2AError::Transport(format!("failed to read response body: {e}")))?;

        let rpc_response: JsonRpcResponse = serde_json::from_slice(&bytes).map_err(|e| {
            A2AError::InvalidJson(format!("failed to parse JSON-RPC response: {e}"))
        })?;

        Ok(rpc_response)
    }
}
