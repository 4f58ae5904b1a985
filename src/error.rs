//! Client error types.
//!
//! Transport and protocol failures surface as [`A2AError`]. Degraded data
//! (a task that never settles, a response with nothing to render) is not an
//! error and never shows up here.

use crate::types::JsonRpcError;

// ---------------------------------------------------------------------------
// Standard JSON-RPC 2.0 error codes
// ---------------------------------------------------------------------------

/// Invalid JSON was received by the server.
pub const PARSE_ERROR: i64 = -32700;

/// The JSON sent is not a valid Request object.
pub const INVALID_REQUEST: i64 = -32600;

/// The method does not exist / is not available.
pub const METHOD_NOT_FOUND: i64 = -32601;

/// Invalid method parameter(s).
pub const INVALID_PARAMS: i64 = -32602;

/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i64 = -32603;

/// The requested task was not found (A2A-specific).
pub const TASK_NOT_FOUND: i64 = -32001;

// ---------------------------------------------------------------------------
// A2AError enum
// ---------------------------------------------------------------------------

/// Unified error type for the client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum A2AError {
    /// The remote agent answered with a JSON-RPC `error` member.
    #[error("JSON-RPC error {code}: {message}")]
    JsonRpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message supplied by the server.
        message: String,
        /// Optional structured error data.
        data: Option<serde_json::Value>,
    },

    /// Transport-level error (connection failed, request failed, etc.).
    #[error("Transport error: {0}")]
    Transport(String),

    /// Request timed out.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// HTTP error with status code and response body.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// Invalid JSON received from remote (parse or deserialization failure).
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// A structured action payload was not a JSON object.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The client was configured with unusable settings.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catch-all for errors that don't fit other categories.
    #[error("{0}")]
    Other(String),
}

/// Convenience result type for client operations.
pub type A2AResult<T> = Result<T, A2AError>;

impl A2AError {
    /// Returns the JSON-RPC error code for protocol errors, or -32603 for
    /// client-side failures.
    pub fn code(&self) -> i64 {
        match self {
            A2AError::JsonRpc { code, .. } => *code,
            A2AError::InvalidJson(_) => PARSE_ERROR,
            A2AError::Transport(_)
            | A2AError::Timeout(_)
            | A2AError::Http { .. }
            | A2AError::InvalidConfig(_)
            | A2AError::Other(_) => INTERNAL_ERROR,
            A2AError::InvalidPayload(_) => INVALID_PARAMS,
        }
    }

    /// Whether the server rejected the request at the protocol level (as
    /// opposed to the request never completing).
    pub fn is_protocol(&self) -> bool {
        matches!(self, A2AError::JsonRpc { .. })
    }

    /// Whether the failure happened on the wire (connect, timeout, HTTP status).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            A2AError::Transport(_) | A2AError::Timeout(_) | A2AError::Http { .. }
        )
    }
}

impl From<JsonRpcError> for A2AError {
    fn from(err: JsonRpcError) -> Self {
        A2AError::JsonRpc {
            code: err.code,
            message: err.message,
            data: err.data,
        }
    }
}

impl From<serde_json::Error> for A2AError {
    fn from(err: serde_json::Error) -> Self {
        A2AError::InvalidJson(err.to_string())
    }
}
