//! # a2ui-client: A2UI client for A2A agents
//!
//! This crate lets a UI shell send a single user request to a remote
//! [A2A](https://a2a-protocol.org/latest/specification/) agent that speaks the
//! [A2UI](https://a2ui.org) extension, and get back the structured messages
//! the agent wants rendered.
//!
//! ## Overview
//!
//! One call to [`client::A2uiClient::send`] does four things in order:
//!
//! 1. **Build** a user message with one part: free text becomes a `text`
//!    part, a structured action becomes an A2UI `data` part
//!    ([`envelope`]).
//! 2. **Submit** it with `message/send` ([`client::A2AClient::submit`]).
//! 3. **Poll** the task with `tasks/get` while it is still working or has no
//!    status message, a bounded number of times ([`client::TaskPoller`]).
//! 4. **Extract** the A2UI messages from the status message, the latest
//!    populated event, or the artifacts, whichever comes first
//!    ([`extract`]).
//!
//! Only connection and submit failures are errors. A task that never settles
//! or a reply with nothing structured in it yields an empty result.
//!
//! ## Feature flags
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `client` | yes     | Card discovery, JSON-RPC transport, polling and the A2UI client (reqwest) |
//!
//! Without `client`, the wire types, envelope builder and extractor are still
//! available.
//!
//! ## Quick Start
//!
//! ```no_run
//! use a2ui_client::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClientBuilder::new("http://localhost:10002")
//!         .with_timeout(Duration::from_secs(30))
//!         .build();
//!
//!     for message in client.send("Find me a restaurant in Lisbon").await? {
//!         println!("{}", message.as_value());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Structured actions go in as [`envelope::Payload::Action`]:
//!
//! ```no_run
//! # use a2ui_client::prelude::*;
//! # async fn example(client: A2uiClient) -> A2AResult<()> {
//! let action = Payload::action(&serde_json::json!({
//!     "userAction": {"name": "book", "sourceComponentId": "book-btn", "context": {}}
//! }))?;
//! let messages = client.send(action).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Wire details
//!
//! - Agent card: `GET {base}/.well-known/agent-card.json`, falling back to
//!   `/.well-known/agent.json` on 404.
//! - Every request carries `X-A2A-Extensions: https://a2ui.org/a2a-extension/a2ui/v0.8`.
//! - A2UI data parts are tagged `mimeType: application/json+a2aui`.

pub mod builders;
pub mod config;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod types;
pub mod utils;

#[cfg(feature = "client")]
pub mod client;

/// Prelude module that re-exports commonly used types and traits.
///
/// # Example
///
/// ```
/// use a2ui_client::prelude::*;
///
/// let msg = build_envelope("hello");
/// assert_eq!(msg.parts.len(), 1);
/// ```
pub mod prelude {
    pub use crate::types::{
        AgentCard, Artifact, Message, Part, Role, SendMessageResponse, Task, TaskEvent, TaskState,
        TaskStatus,
    };

    pub use crate::error::{A2AError, A2AResult};

    pub use crate::builders::ClientBuilder;
    pub use crate::config::{ClientConfig, PollPolicy};
    pub use crate::envelope::{build_envelope, Payload};
    pub use crate::extract::{extract, Extraction, PartSource, StructuredMessage};

    #[cfg(feature = "client")]
    pub use crate::client::{A2AClient, A2uiClient, PollStop, SendOutcome};
}

// Re-export core types at crate root for convenience.
pub use builders::ClientBuilder;
pub use config::{ClientConfig, PollPolicy};
pub use envelope::Payload;
pub use error::{A2AError, A2AResult};
pub use extract::StructuredMessage;
pub use types::*;

#[cfg(feature = "client")]
pub use client::A2uiClient;
