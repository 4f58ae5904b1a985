//! Shared test utilities for integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use a2ui_client::client::Transport;
use a2ui_client::error::{A2AError, A2AResult};
use a2ui_client::types::{JsonRpcError, JsonRpcId, JsonRpcRequest, JsonRpcResponse};
use a2ui_client::utils::constants::{A2UI_EXTENSION_URI, A2UI_MIME_TYPE};
use async_trait::async_trait;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Wire fixtures
// ---------------------------------------------------------------------------

/// An A2UI data part.
pub fn data_part(data: Value) -> Value {
    json!({"kind": "data", "data": data, "mimeType": A2UI_MIME_TYPE})
}

/// A plain text part.
pub fn text_part(text: &str) -> Value {
    json!({"kind": "text", "text": text})
}

/// A task with the given state and, optionally, a status message with `parts`.
pub fn task_json(id: &str, state: &str, parts: Option<Vec<Value>>) -> Value {
    let mut status = json!({"state": state});
    if let Some(parts) = parts {
        status["message"] = json!({
            "kind": "message",
            "messageId": format!("{id}-status"),
            "role": "agent",
            "parts": parts,
        });
    }
    json!({
        "kind": "task",
        "id": id,
        "contextId": "ctx-1",
        "status": status,
    })
}

/// A direct message reply to `message/send`.
pub fn message_json(text: &str) -> Value {
    json!({
        "kind": "message",
        "messageId": "reply-1",
        "role": "agent",
        "parts": [text_part(text)],
    })
}

// ---------------------------------------------------------------------------
// Scripted transport
// ---------------------------------------------------------------------------

/// A transport that answers from a script, one entry per request, and
/// remembers every request it saw.
///
/// Clones share the script and the request log, so a test can keep one
/// handle while the client owns another.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<A2AResult<Value>>>>,
    requests: Arc<Mutex<Vec<JsonRpcRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next request with `result`.
    pub fn reply(self, result: Value) -> Self {
        self.script.lock().unwrap().push_back(Ok(result));
        self
    }

    /// Answer the next request with a JSON-RPC `error` member.
    pub fn reply_error(self, code: i64, message: &str) -> Self {
        self.script.lock().unwrap().push_back(Err(A2AError::JsonRpc {
            code,
            message: message.to_string(),
            data: None,
        }));
        self
    }

    /// Fail the next request at the transport level.
    pub fn fail(self, error: A2AError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    /// Methods of every request sent so far, in order.
    pub fn methods(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.method.clone())
            .collect()
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<JsonRpcRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &JsonRpcRequest) -> A2AResult<JsonRpcResponse> {
        self.requests.lock().unwrap().push(request.clone());

        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(A2AError::Transport("mock: script exhausted".to_string())));

        match next {
            Ok(result) => Ok(JsonRpcResponse::success(request.id.clone(), result)),
            Err(A2AError::JsonRpc {
                code,
                message,
                data,
            }) => Ok(JsonRpcResponse::error(
                request.id.clone(),
                JsonRpcError {
                    code,
                    message,
                    data,
                },
            )),
            Err(e) => Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// In-process mock agent (axum)
// ---------------------------------------------------------------------------

/// Where the mock agent serves its card.
#[derive(Debug, Clone, Copy)]
pub enum CardLocation {
    /// `/.well-known/agent-card.json`
    WellKnown,
    /// Only the pre-0.3 `/.well-known/agent.json`.
    Legacy,
    /// A custom path.
    Custom(&'static str),
}

impl CardLocation {
    fn path(self) -> &'static str {
        match self {
            CardLocation::WellKnown => "/.well-known/agent-card.json",
            CardLocation::Legacy => "/.well-known/agent.json",
            CardLocation::Custom(path) => path,
        }
    }
}

/// One HTTP request the mock agent received.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub path: String,
    /// JSON-RPC method for `POST /a2a`, `None` for card fetches.
    pub rpc_method: Option<String>,
    pub params: Value,
    pub headers: HeaderMap,
}

impl SeenRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }
}

struct AgentState {
    card_path: &'static str,
    card: Value,
    replies: Mutex<VecDeque<A2AResult<Value>>>,
    seen: Mutex<Vec<SeenRequest>>,
}

/// A running mock A2A agent on a random local port.
pub struct MockAgent {
    pub base_url: String,
    state: Arc<AgentState>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockAgent {
    /// Start an agent that serves its card at the well-known path and
    /// answers JSON-RPC calls from `replies`, in order.
    pub async fn start(replies: Vec<A2AResult<Value>>) -> Self {
        Self::start_with(CardLocation::WellKnown, replies).await
    }

    pub async fn start_with(location: CardLocation, replies: Vec<A2AResult<Value>>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let card = json!({
            "name": "Mock A2UI Agent",
            "description": "Answers from a script",
            "version": "0.1.0",
            "url": format!("{}/a2a", base_url),
            "preferredTransport": "JSONRPC",
            "protocolVersion": "0.3.0",
            "capabilities": {
                "streaming": false,
                "extensions": [{"uri": A2UI_EXTENSION_URI, "required": false}]
            },
            "skills": []
        });

        let state = Arc::new(AgentState {
            card_path: location.path(),
            card,
            replies: Mutex::new(replies.into()),
            seen: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/a2a", post(handle_rpc))
            .fallback(handle_card)
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Brief wait for the server to start accepting connections.
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        Self {
            base_url,
            state,
            _handle: handle,
        }
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().unwrap().clone()
    }

    /// JSON-RPC methods received so far, in order.
    pub fn rpc_methods(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter_map(|r| r.rpc_method)
            .collect()
    }

    /// Paths of every request received so far, in order.
    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

async fn handle_card(
    State(state): State<Arc<AgentState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    state.seen.lock().unwrap().push(SeenRequest {
        path: uri.path().to_string(),
        rpc_method: None,
        params: Value::Null,
        headers,
    });

    if uri.path() == state.card_path {
        Json(state.card.clone()).into_response()
    } else {
        (StatusCode::NOT_FOUND, "not found").into_response()
    }
}

async fn handle_rpc(
    State(state): State<Arc<AgentState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let method = body["method"].as_str().unwrap_or_default().to_string();
    state.seen.lock().unwrap().push(SeenRequest {
        path: "/a2a".to_string(),
        rpc_method: Some(method),
        params: body["params"].clone(),
        headers,
    });

    let id: Option<JsonRpcId> = serde_json::from_value(body["id"].clone()).ok();
    let next = state.replies.lock().unwrap().pop_front();

    let response = match next {
        Some(Ok(result)) => JsonRpcResponse::success(id, result),
        Some(Err(A2AError::JsonRpc {
            code,
            message,
            data,
        })) => JsonRpcResponse::error(
            id,
            JsonRpcError {
                code,
                message,
                data,
            },
        ),
        Some(Err(other)) => JsonRpcResponse::error(
            id,
            JsonRpcError {
                code: other.code(),
                message: other.to_string(),
                data: None,
            },
        ),
        None => JsonRpcResponse::error(
            id,
            JsonRpcError {
                code: -32603,
                message: "mock: no scripted reply".to_string(),
                data: None,
            },
        ),
    };

    Json(serde_json::to_value(response).unwrap())
}

/// A protocol error for scripting replies.
pub fn rpc_error(code: i64, message: &str) -> A2AResult<Value> {
    Err(A2AError::JsonRpc {
        code,
        message: message.to_string(),
        data: None,
    })
}
