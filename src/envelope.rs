//! Building the outgoing `message/send` envelope.
//!
//! A request from the UI is either free text typed by the user or a
//! structured A2UI client event (a `userAction` and friends). Both end up as
//! a single-part user [`Message`]: text as a `text` part, actions as a `data`
//! part tagged with [`A2UI_MIME_TYPE`](crate::utils::constants::A2UI_MIME_TYPE).
//!
//! Text that happens to be a JSON object is promoted to an action. This is a
//! convenience for shells that pass pre-serialised events around as strings;
//! natural language never parses as an object, so it stays text.

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{A2AError, A2AResult};
use crate::types::{Message, Part, SendMessageParams};

/// What the caller wants to send.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Free text. Promoted to an action if it parses as a JSON object.
    Text(String),
    /// A structured client event, sent verbatim as the data part.
    Action(Map<String, Value>),
}

impl Payload {
    /// Serialize a typed client event into an action payload.
    ///
    /// # Errors
    ///
    /// Returns [`A2AError::InvalidPayload`] if the value does not serialize to
    /// a JSON object.
    ///
    /// # Example
    ///
    /// ```
    /// use a2ui_client::envelope::Payload;
    /// use serde_json::json;
    ///
    /// let payload = Payload::action(&json!({"userAction": {"name": "book"}})).unwrap();
    /// assert!(matches!(payload, Payload::Action(_)));
    /// assert!(Payload::action(&json!([1, 2])).is_err());
    /// ```
    pub fn action<T: Serialize + ?Sized>(event: &T) -> A2AResult<Self> {
        match serde_json::to_value(event)? {
            Value::Object(map) => Ok(Payload::Action(map)),
            other => Err(A2AError::InvalidPayload(format!(
                "structured action must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Convert into the single message part that goes on the wire.
    pub fn into_part(self) -> Part {
        match self {
            Payload::Action(map) => Part::a2ui(Value::Object(map)),
            Payload::Text(text) => match sniff_action(&text) {
                Some(map) => {
                    tracing::debug!("text payload parsed as a structured action");
                    Part::a2ui(Value::Object(map))
                }
                None => Part::text(text),
            },
        }
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(action: Map<String, Value>) -> Self {
        Payload::Action(action)
    }
}

impl TryFrom<Value> for Payload {
    type Error = A2AError;

    fn try_from(value: Value) -> A2AResult<Self> {
        Payload::action(&value)
    }
}

/// Build the user message for a payload.
///
/// Every call mints a fresh `messageId`; the envelope always carries exactly
/// one part.
///
/// # Example
///
/// ```
/// use a2ui_client::envelope::build_envelope;
/// use a2ui_client::types::Part;
///
/// let msg = build_envelope("show me PROJ-123");
/// assert_eq!(msg.parts, vec![Part::text("show me PROJ-123")]);
/// ```
pub fn build_envelope(payload: impl Into<Payload>) -> Message {
    let part = payload.into().into_part();
    Message::user(Uuid::new_v4().to_string(), vec![part])
}

/// Wrap a payload in `message/send` params.
pub fn build_send_params(payload: impl Into<Payload>) -> SendMessageParams {
    SendMessageParams {
        message: build_envelope(payload),
        metadata: None,
    }
}

/// Returns the object if `text` is a JSON object; `None` for anything else,
/// including arrays, scalars and `null`.
fn sniff_action(text: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
