//! Pulling A2UI messages out of a task snapshot.
//!
//! Agents put their reply in different places depending on the runtime that
//! hosts them: the final status message, the latest status event in the
//! task's event log, or the task's artifacts. [`PartSource::FALLBACK_CHAIN`]
//! lists those locations in priority order; the first one that yields any
//! parts wins and the others are not consulted.
//!
//! From the winning parts, every `data` part becomes one
//! [`StructuredMessage`]. Text parts are not UI updates; they are kept aside in
//! [`Extraction::text`] so a caller can show them if it wants to.
//!
//! Extraction is a pure function of the task. Finding nothing is a normal
//! outcome and yields an empty result.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::A2AResult;
use crate::types::{Part, Task};
use crate::utils::parts::{get_data_parts, get_text_parts};

/// One server-to-client A2UI message, passed through untouched.
///
/// The client does not interpret these; they are handed to the surface
/// renderer as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredMessage(Value);

impl StructuredMessage {
    /// Wrap a raw JSON value.
    pub fn new(value: Value) -> Self {
        StructuredMessage(value)
    }

    /// Borrow the raw JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the raw JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Decode into a renderer-specific type.
    pub fn parse<T: DeserializeOwned>(&self) -> A2AResult<T> {
        Ok(T::deserialize(&self.0)?)
    }
}

impl From<Value> for StructuredMessage {
    fn from(value: Value) -> Self {
        StructuredMessage(value)
    }
}

/// A location in the task where response parts may live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartSource {
    /// `task.status.message.parts`.
    StatusMessage,
    /// The most recent event in `task.events` whose status message has parts.
    EventHistory,
    /// The parts of every artifact in `task.artifacts`, concatenated in order.
    Artifacts,
}

impl PartSource {
    /// Sources in the order they are tried.
    pub const FALLBACK_CHAIN: [PartSource; 3] = [
        PartSource::StatusMessage,
        PartSource::EventHistory,
        PartSource::Artifacts,
    ];

    /// Parts found at this location, or `None` if there are none.
    ///
    /// Never returns `Some` with an empty vector.
    pub fn collect(self, task: &Task) -> Option<Vec<&Part>> {
        match self {
            PartSource::StatusMessage => {
                let parts = &task.status.message.as_ref()?.parts;
                non_empty(parts.iter().collect())
            }
            PartSource::EventHistory => task.events.as_ref()?.iter().rev().find_map(|event| {
                let parts = &event.status.as_ref()?.message.as_ref()?.parts;
                non_empty(parts.iter().collect())
            }),
            PartSource::Artifacts => {
                let parts: Vec<&Part> = task
                    .artifacts
                    .as_ref()?
                    .iter()
                    .flat_map(|artifact| {
                        tracing::debug!(
                            "artifact {} has {} parts",
                            artifact.artifact_id,
                            artifact.parts.len()
                        );
                        artifact.parts.iter()
                    })
                    .collect();
                non_empty(parts)
            }
        }
    }
}

impl fmt::Display for PartSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PartSource::StatusMessage => "status message",
            PartSource::EventHistory => "event history",
            PartSource::Artifacts => "artifacts",
        };
        write!(f, "{}", s)
    }
}

fn non_empty(parts: Vec<&Part>) -> Option<Vec<&Part>> {
    (!parts.is_empty()).then_some(parts)
}

/// Everything extraction found in one task snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Where the parts came from; `None` if no source had any.
    pub source: Option<PartSource>,
    /// Structured messages from the data parts, in part order.
    pub messages: Vec<StructuredMessage>,
    /// Text from the text parts of the same source, in part order.
    pub text: Vec<String>,
}

impl Extraction {
    /// Nothing found.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether there are no structured messages to render.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Extract the structured messages from a task snapshot.
///
/// # Example
///
/// ```
/// use a2ui_client::extract::extract;
/// use a2ui_client::types::Task;
/// use serde_json::json;
///
/// let task: Task = serde_json::from_value(json!({
///     "id": "t-1",
///     "kind": "task",
///     "status": {
///         "state": "completed",
///         "message": {"parts": [{"kind": "data", "data": {"beginRendering": {}}}]}
///     }
/// })).unwrap();
///
/// let messages = extract(&task);
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].as_value(), &json!({"beginRendering": {}}));
/// ```
pub fn extract(task: &Task) -> Vec<StructuredMessage> {
    extract_detailed(task).messages
}

/// Like [`extract`], but also reports the source used and the text parts
/// that were left out.
pub fn extract_detailed(task: &Task) -> Extraction {
    if !task.is_task() {
        tracing::debug!("response kind '{}' is not a task, nothing to extract", task.kind);
        return Extraction::empty();
    }

    let found = PartSource::FALLBACK_CHAIN
        .iter()
        .find_map(|source| source.collect(task).map(|parts| (*source, parts)));

    let Some((source, parts)) = found else {
        tracing::debug!("task {} has no parts in any location", task.id);
        return Extraction::empty();
    };

    tracing::debug!(
        "using {} parts from the {} of task {}",
        parts.len(),
        source,
        task.id
    );
    for part in parts.iter().filter(|p| !matches!(p, Part::Data { .. })) {
        tracing::debug!("skipping part of kind: {}", part.kind());
    }

    Extraction {
        source: Some(source),
        messages: get_data_parts(parts.iter().copied())
            .into_iter()
            .map(StructuredMessage)
            .collect(),
        text: get_text_parts(parts.iter().copied()),
    }
}
