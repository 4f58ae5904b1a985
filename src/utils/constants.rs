//! Constants for well-known URIs and content types used by the client.

/// The well-known path for the agent card (A2A v0.3+)
pub const AGENT_CARD_WELL_KNOWN_PATH: &str = "/.well-known/agent-card.json";

/// The previous well-known path for the agent card (deprecated, but still supported)
pub const PREV_AGENT_CARD_WELL_KNOWN_PATH: &str = "/.well-known/agent.json";

/// Mime type that marks a data part as an A2UI payload.
///
/// Must match what the agent expects, or data parts are not recognised.
pub const A2UI_MIME_TYPE: &str = "application/json+a2aui";

/// URI of the A2UI A2A extension (v0.8), advertised on every request.
pub const A2UI_EXTENSION_URI: &str = "https://a2ui.org/a2a-extension/a2ui/v0.8";

/// JSON-RPC method for submitting a message.
pub const METHOD_MESSAGE_SEND: &str = "message/send";

/// JSON-RPC method for fetching a task.
pub const METHOD_TASKS_GET: &str = "tasks/get";
