//! JSON-RPC protocol client for a single remote agent.
//!
//! Wraps a [`Transport`] with typed methods for the two A2A operations the
//! A2UI client needs: `message/send` and `tasks/get`.

use serde::Serialize;

use crate::error::{A2AError, A2AResult};
use crate::types::{
    AgentCard, GetTaskParams, JsonRpcId, JsonRpcRequest, JsonRpcResponse, Message,
    SendMessageParams, SendMessageResponse, Task,
};
use crate::utils::constants::{METHOD_MESSAGE_SEND, METHOD_TASKS_GET};

use super::card_resolver::CardResolver;
use super::transport::{JsonRpcTransport, Transport};

/// Client for one A2A agent endpoint.
///
/// # Construction
///
/// ```no_run
/// use a2ui_client::client::{A2AClient, CardResolver};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let card = CardResolver::new().resolve("http://localhost:10002").await?;
/// let client = A2AClient::from_card(card, reqwest::Client::new())?;
///
/// // Or skip discovery entirely:
/// let client = A2AClient::from_endpoint("http://localhost:10002/");
/// # Ok(())
/// # }
/// ```
pub struct A2AClient {
    transport: Box<dyn Transport>,
    agent_card: Option<AgentCard>,
}

impl std::fmt::Debug for A2AClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("A2AClient")
            .field("agent_card", &self.agent_card)
            .finish_non_exhaustive()
    }
}

impl A2AClient {
    /// Create a client from an already-resolved agent card.
    ///
    /// `http` is used for every JSON-RPC request, so it should carry the
    /// same default headers as the client that fetched the card.
    ///
    /// # Errors
    ///
    /// Returns an error if no endpoint URL can be found in the card.
    pub fn from_card(card: AgentCard, http: reqwest::Client) -> A2AResult<Self> {
        let url = CardResolver::get_a2a_url(&card).ok_or_else(|| {
            A2AError::Transport(format!(
                "agent card for '{}' has no JSONRPC interface and no url",
                card.name
            ))
        })?;

        tracing::debug!("agent '{}' serves JSON-RPC at {}", card.name, url);

        Ok(Self {
            transport: Box::new(JsonRpcTransport::with_client(url, http)),
            agent_card: Some(card),
        })
    }

    /// Create a client with a custom transport.
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            agent_card: None,
        }
    }

    /// Create a client from a direct endpoint URL (skips agent card resolution).
    pub fn from_endpoint(url: &str) -> Self {
        Self::with_transport(Box::new(JsonRpcTransport::new(url)))
    }

    /// The agent card this client was built from, if any.
    pub fn agent_card(&self) -> Option<&AgentCard> {
        self.agent_card.as_ref()
    }

    /// Send a message to the agent (`message/send`).
    ///
    /// The agent answers with either a [`Task`] or a direct [`Message`].
    pub async fn send_message(&self, params: SendMessageParams) -> A2AResult<SendMessageResponse> {
        let request = build_request(METHOD_MESSAGE_SEND, &params)?;
        let response = self.transport.send(&request).await?;
        parse_result(response)
    }

    /// Submit a single envelope and return the initial response.
    ///
    /// A JSON-RPC error in the response is returned as
    /// [`A2AError::JsonRpc`] carrying the server's message; it is not retried.
    pub async fn submit(&self, message: Message) -> A2AResult<SendMessageResponse> {
        tracing::debug!(
            "submitting message {} with {} part(s)",
            message.message_id,
            message.parts.len()
        );
        let result = self
            .send_message(SendMessageParams {
                message,
                metadata: None,
            })
            .await;

        if let Err(e) = &result {
            tracing::error!("message/send failed: {}", e);
        }
        result
    }

    /// Get the current state of a task (`tasks/get`).
    pub async fn get_task(&self, params: GetTaskParams) -> A2AResult<Task> {
        let request = build_request(METHOD_TASKS_GET, &params)?;
        let response = self.transport.send(&request).await?;
        parse_result(response)
    }

    /// Convenience: get a task by ID.
    pub async fn get_task_by_id(&self, task_id: &str) -> A2AResult<Task> {
        self.get_task(GetTaskParams {
            id: task_id.to_string(),
            history_length: None,
        })
        .await
    }

    /// Close the client and release any held resources.
    pub async fn close(self) -> A2AResult<()> {
        self.transport.close().await
    }
}

// ──────────────────────────────────────────────────
// Internal helpers
// ──────────────────────────────────────────────────

/// Build a JSON-RPC request with a random UUID ID.
fn build_request(method: &str, params: &impl Serialize) -> A2AResult<JsonRpcRequest> {
    let params_value = serde_json::to_value(params)
        .map_err(|e| A2AError::Transport(format!("failed to serialize request params: {e}")))?;

    Ok(JsonRpcRequest::new(
        JsonRpcId::String(uuid::Uuid::new_v4().to_string()),
        method,
        Some(params_value),
    ))
}

/// Parse the `result` field from a JSON-RPC response into the expected type.
///
/// If the response contains an error, converts it into an [`A2AError::JsonRpc`].
fn parse_result<T: serde::de::DeserializeOwned>(response: JsonRpcResponse) -> A2AResult<T> {
    if let Some(error) = response.error {
        return Err(error.into());
    }

    let result = response.result.ok_or_else(|| {
        A2AError::InvalidJson("JSON-RPC response has neither 'result' nor 'error'".to_string())
    })?;

    serde_json::from_value(result)
        .map_err(|e| A2AError::InvalidJson(format!("failed to deserialize response result: {e}")))
}
