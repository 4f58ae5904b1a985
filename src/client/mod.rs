//! A2UI client: talk to a remote A2UI-capable agent.
//!
//! - [`A2uiClient`]: send a UI payload, get structured messages back
//! - [`A2AClient`]: typed JSON-RPC methods (`message/send`, `tasks/get`)
//! - [`TaskPoller`]: bounded polling of a pending task
//! - [`CardResolver`]: discover agent cards via the well-known URL convention
//! - [`Transport`] / [`JsonRpcTransport`]: pluggable transport layer
//!
//! # Quick Start
//!
//! ```no_run
//! use a2ui_client::client::A2uiClient;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = A2uiClient::new("http://localhost:10002");
//!
//! // Free text:
//! let messages = client.send("Book a table for two").await?;
//!
//! // A structured user action:
//! let action = json!({"userAction": {"name": "confirm", "context": {}}});
//! let messages = client.send(action.to_string()).await?;
//!
//! // With diagnostics:
//! let outcome = client.send_detailed("Book a table for two").await?;
//! if let Some(report) = &outcome.polling {
//!     println!("polled {} time(s): {}", report.attempts, report.stop);
//! }
//! # Ok(())
//! # }
//! ```

mod a2a_client;
mod a2ui_client;
mod card_resolver;
mod poller;
mod transport;

pub use crate::types::SendMessageResponse;
pub use a2a_client::A2AClient;
pub use a2ui_client::{A2uiClient, PollReport, SendOutcome};
pub use card_resolver::CardResolver;
pub use poller::{needs_polling, PollOutcome, PollStop, TaskPoller};
pub use transport::{JsonRpcTransport, Transport, TransportConfig};
