//! A2A protocol types used by the A2UI client.
//!
//! Reference: <https://github.com/a2aproject/A2A/blob/main/specification/a2a.proto>
//!
//! Only the subset of the schema that the client sends or reads is modelled
//! here. Decoding is deliberately lenient: servers disagree about which task
//! fields they populate, so almost everything on the response side carries a
//! serde default.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::A2UI_MIME_TYPE;

// ============================================================================
// Enums
// ============================================================================

/// The lifecycle state of a task.
///
/// Serialized as kebab-case strings (`"input-required"`). States this crate
/// does not know decode to [`TaskState::Unknown`] instead of failing.
///
/// Proto ref: `enum TaskState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskState {
    /// Task has been received but not yet started.
    Submitted,
    /// Task is actively being processed.
    Working,
    /// Task completed successfully.
    Completed,
    /// Task failed.
    Failed,
    /// Task was canceled.
    Canceled,
    /// Task requires additional input from the user.
    InputRequired,
    /// Task was rejected by the agent.
    Rejected,
    /// Task requires authentication.
    AuthRequired,
    /// Missing or unrecognised state.
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskState::Submitted => "submitted",
            TaskState::Working => "working",
            TaskState::Completed => "completed",
            TaskState::Failed => "failed",
            TaskState::Canceled => "canceled",
            TaskState::InputRequired => "input-required",
            TaskState::Rejected => "rejected",
            TaskState::AuthRequired => "auth-required",
            TaskState::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// The role of a message sender.
///
/// Proto ref: `enum Role`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message from the user / client.
    User,
    /// Message from the agent / server.
    Agent,
    /// Unspecified role.
    #[default]
    #[serde(other)]
    Unspecified,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Agent => write!(f, "agent"),
            Role::Unspecified => write!(f, "unspecified"),
        }
    }
}

// ============================================================================
// Core Task Types
// ============================================================================

/// Current status of a task.
///
/// Proto ref: `message TaskStatus`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    /// The current state.
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: TaskState,

    /// Optional message associated with this status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,

    /// ISO-8601 timestamp of when this status was set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// A historical status event recorded on a task.
///
/// Not part of the core protocol; some agent runtimes attach their event log
/// to the task as `events`. Only the status message is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEvent {
    /// Status snapshot carried by this event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// A task, the primary unit of work in the A2A protocol.
///
/// `kind` is kept as a string so a response that is not a task (for example
/// a server-specific kind) survives decoding and can be rejected later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: String,

    /// Context identifier (groups related tasks/messages).
    #[serde(default, deserialize_with = "null_as_default")]
    pub context_id: String,

    /// Discriminator field: `"task"` for real tasks.
    #[serde(default = "kind_task")]
    pub kind: String,

    /// Current task status. `null` decodes as the default status.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: TaskStatus,

    /// Event history, when the server exposes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<TaskEvent>>,

    /// Artifacts produced by the task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<Artifact>>,

    /// Message history for this task.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<Message>>,

    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Task {
    /// Whether the `kind` discriminator says this is a task.
    pub fn is_task(&self) -> bool {
        self.kind == TASK_KIND
    }
}

// ============================================================================
// Message & Parts
// ============================================================================

/// A single message in a conversation.
///
/// Outgoing messages always carry every required field. Incoming messages
/// nested in events sometimes only have `parts`, hence the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message_id: String,

    /// Who sent this message.
    #[serde(default)]
    pub role: Role,

    /// Discriminator field, always "message".
    #[serde(default = "kind_message")]
    pub kind: String,

    /// Content parts of the message. `null` decodes as empty and undecodable
    /// parts as [`Part::Unknown`].
    #[serde(default, deserialize_with = "lenient_parts")]
    pub parts: Vec<Part>,

    /// Context this message belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,

    /// Task this message is associated with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// File content provided as base64-encoded bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileWithBytes {
    /// Base64-encoded file content.
    pub bytes: String,
    /// MIME type of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Optional file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// File content provided as a URI reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileWithUri {
    /// URI pointing to the file content.
    pub uri: String,
    /// MIME type of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Optional file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// File content: either inline bytes or a URI reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileContent {
    /// File with inline base64-encoded bytes.
    Bytes(FileWithBytes),
    /// File referenced by URI.
    Uri(FileWithUri),
}

/// A content part within a message or artifact.
///
/// JSON wire format:
/// - Text: `{"kind": "text", "text": "hello"}`
/// - Data: `{"kind": "data", "data": {...}, "mimeType": "application/json+a2aui"}`
/// - File: `{"kind": "file", "file": {"uri": "...", "mimeType": "..."}}`
///
/// The client only ever sends text and data parts. File parts are accepted
/// on decode, and any other kind decodes as [`Part::Unknown`], so a task
/// carrying them still parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Part {
    /// A text content part. Discriminator: `"text"`.
    #[serde(rename = "text")]
    Text {
        /// The text content.
        text: String,
        /// Optional metadata associated with this part.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<serde_json::Value>,
    },
    /// A file content part. Discriminator: `"file"`.
    #[serde(rename = "file")]
    File {
        /// The file content (bytes or URI).
        file: FileContent,
        /// Optional metadata associated with this part.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<serde_json::Value>,
    },
    /// A structured data content part. Discriminator: `"data"`.
    #[serde(rename = "data")]
    Data {
        /// Arbitrary structured data.
        data: serde_json::Value,
        /// Content type of `data`; A2UI payloads use [`A2UI_MIME_TYPE`].
        #[serde(
            rename = "mimeType",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        mime_type: Option<String>,
        /// Optional metadata associated with this part.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<serde_json::Value>,
    },
    /// A part of a kind this crate does not model. Never sent; skipped on
    /// extraction.
    #[serde(rename = "unknown")]
    #[serde(other)]
    Unknown,
}

/// An artifact produced by a task.
///
/// Proto ref: `message Artifact`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Unique artifact identifier.
    #[serde(default)]
    pub artifact_id: String,

    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description of the artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Content parts of the artifact. `null` decodes as empty and undecodable
    /// parts as [`Part::Unknown`].
    #[serde(default, deserialize_with = "lenient_parts")]
    pub parts: Vec<Part>,

    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

// ============================================================================
// Agent Card (discovery subset)
// ============================================================================

/// Self-describing manifest for an A2A agent.
///
/// Only the fields needed to locate the JSON-RPC endpoint and report the
/// advertised extensions are modelled; everything else is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    /// Human-readable name.
    pub name: String,

    /// Description of the agent's capabilities.
    #[serde(default)]
    pub description: String,

    /// Agent version string.
    #[serde(default)]
    pub version: String,

    /// Primary URL for the agent.
    #[serde(default)]
    pub url: String,

    /// Preferred transport protocol (e.g. "JSONRPC").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_transport: Option<String>,

    /// Supported transport interfaces.
    #[serde(default)]
    pub supported_interfaces: Vec<AgentInterface>,

    /// Additional interfaces (pre-0.3 cards).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_interfaces: Option<Vec<AgentInterface>>,

    /// Agent capabilities.
    #[serde(default)]
    pub capabilities: AgentCapabilities,

    /// Protocol version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_version: Option<String>,
}

/// A transport interface supported by an agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentInterface {
    /// URL of the interface endpoint.
    pub url: String,

    /// Transport protocol (e.g. "JSONRPC", "HTTP+JSON", "GRPC").
    pub transport: String,
}

/// Agent capabilities declaration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    /// Whether the agent supports streaming.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming: Option<bool>,

    /// Whether the agent supports push notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push_notifications: Option<bool>,

    /// Protocol extensions supported by the agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<AgentExtension>>,
}

/// A protocol extension supported by the agent.
///
/// Proto ref: `message AgentExtension`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentExtension {
    /// Extension URI.
    pub uri: String,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether clients must support this extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Extension parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

// ============================================================================
// JSON-RPC Foundation
// ============================================================================

/// A JSON-RPC 2.0 request ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcId {
    /// String identifier.
    String(String),
    /// Numeric identifier.
    Number(i64),
    /// Null.
    Null,
}

impl fmt::Display for JsonRpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonRpcId::String(s) => write!(f, "{}", s),
            JsonRpcId::Number(n) => write!(f, "{}", n),
            JsonRpcId::Null => write!(f, "null"),
        }
    }
}

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRpcRequest {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,

    /// Request identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonRpcId>,

    /// Method name.
    pub method: String,

    /// Method parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
}

/// A JSON-RPC 2.0 response.
///
/// Exactly one of `result` or `error` should be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRpcResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,

    /// Request identifier this response corresponds to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonRpcId>,

    /// Successful result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,

    /// Error result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create a successful JSON-RPC response.
    pub fn success(id: Option<JsonRpcId>, result: serde_json::Value) -> Self {
        JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error JSON-RPC response.
    pub fn error(id: Option<JsonRpcId>, error: JsonRpcError) -> Self {
        JsonRpcResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRpcError {
    /// Error code.
    pub code: i64,

    /// Human-readable error message.
    pub message: String,

    /// Optional structured error data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// ============================================================================
// Request / Response Parameter Types
// ============================================================================

/// Parameters for `message/send`.
///
/// Proto ref: `message SendMessageRequest`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageParams {
    /// The message to send.
    pub message: Message,

    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Parameters for `tasks/get`.
///
/// Proto ref: `message GetTaskRequest`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTaskParams {
    /// Task ID to retrieve.
    pub id: String,

    /// Maximum number of history messages to include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_length: Option<i32>,
}

// ============================================================================
// SendMessageResponse (oneof: Task | Message)
// ============================================================================

/// Result payload of `message/send`.
///
/// `"message"` decodes as a direct [`Message`] reply. Every other kind,
/// including a missing one, decodes as a [`Task`] whose `kind` string is
/// preserved.
#[derive(Debug, Clone)]
pub enum SendMessageResponse {
    /// A task was created/updated.
    Task(Task),

    /// A direct message response.
    Message(Message),
}

impl Serialize for SendMessageResponse {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SendMessageResponse::Task(inner) => inner.serialize(serializer),
            SendMessageResponse::Message(inner) => inner.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SendMessageResponse {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let kind = value.get("kind").and_then(|v| v.as_str());

        if kind == Some(MESSAGE_KIND) {
            let msg: Message = serde_json::from_value(value).map_err(serde::de::Error::custom)?;
            return Ok(SendMessageResponse::Message(msg));
        }

        let task: Task = serde_json::from_value(value).map_err(serde::de::Error::custom)?;
        Ok(SendMessageResponse::Task(task))
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

const TASK_KIND: &str = "task";
const MESSAGE_KIND: &str = "message";

fn kind_task() -> String {
    TASK_KIND.to_string()
}

fn kind_message() -> String {
    MESSAGE_KIND.to_string()
}

/// Decode a field where an explicit `null` means the same as a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a part list leniently.
///
/// `null` is an empty list. A part that does not decode (a known kind with a
/// malformed body, or a non-object entry) becomes [`Part::Unknown`] instead
/// of failing the whole message.
fn lenient_parts<'de, D>(deserializer: D) -> Result<Vec<Part>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|value| {
            serde_json::from_value(value).unwrap_or_else(|e| {
                tracing::debug!("undecodable part kept as unknown: {}", e);
                Part::Unknown
            })
        })
        .collect())
}

impl Part {
    /// Create a text part.
    ///
    /// Produces JSON: `{"kind": "text", "text": "..."}`
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text {
            text: text.into(),
            metadata: None,
        }
    }

    /// Create a structured data part without a mime type.
    pub fn data(data: serde_json::Value) -> Self {
        Part::Data {
            data,
            mime_type: None,
            metadata: None,
        }
    }

    /// Create a data part tagged with the A2UI mime type.
    ///
    /// Produces JSON: `{"kind": "data", "data": {...}, "mimeType": "application/json+a2aui"}`
    pub fn a2ui(data: serde_json::Value) -> Self {
        Part::Data {
            data,
            mime_type: Some(A2UI_MIME_TYPE.to_string()),
            metadata: None,
        }
    }

    /// Wire discriminator of this part.
    pub fn kind(&self) -> &'static str {
        match self {
            Part::Text { .. } => "text",
            Part::File { .. } => "file",
            Part::Data { .. } => "data",
            Part::Unknown => "unknown",
        }
    }
}

impl Message {
    /// Create a user message with the given id and parts.
    pub fn user(message_id: impl Into<String>, parts: Vec<Part>) -> Self {
        Message {
            message_id: message_id.into(),
            role: Role::User,
            kind: kind_message(),
            parts,
            context_id: None,
            task_id: None,
            metadata: None,
        }
    }

    /// Create an agent message with the given id and parts.
    pub fn agent(message_id: impl Into<String>, parts: Vec<Part>) -> Self {
        Message {
            message_id: message_id.into(),
            role: Role::Agent,
            kind: kind_message(),
            parts,
            context_id: None,
            task_id: None,
            metadata: None,
        }
    }
}

impl TaskStatus {
    /// Create a new TaskStatus with the given state and no message.
    pub fn new(state: TaskState) -> Self {
        TaskStatus {
            state,
            message: None,
            timestamp: None,
        }
    }

    /// Create a new TaskStatus carrying a message.
    pub fn with_message(state: TaskState, message: Message) -> Self {
        TaskStatus {
            state,
            message: Some(message),
            timestamp: None,
        }
    }
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC 2.0 request.
    pub fn new(
        id: impl Into<JsonRpcId>,
        method: impl Into<String>,
        params: Option<serde_json::Value>,
    ) -> Self {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(id.into()),
            method: method.into(),
            params,
        }
    }
}

impl From<String> for JsonRpcId {
    fn from(s: String) -> Self {
        JsonRpcId::String(s)
    }
}

impl From<&str> for JsonRpcId {
    fn from(s: &str) -> Self {
        JsonRpcId::String(s.to_string())
    }
}

impl From<i64> for JsonRpcId {
    fn from(n: i64) -> Self {
        JsonRpcId::Number(n)
    }
}

// ============================================================================
// Tests
// ============================================================================
