//! The A2UI client: one call from a UI payload to renderable messages.
//!
//! [`A2uiClient::send`] builds the envelope, submits it, polls the task while
//! it is still pending and extracts the structured messages from whatever
//! snapshot polling ends with.
//!
//! The connection (agent card plus JSON-RPC transport) is set up on first
//! use and kept for the life of the client. If setting it up fails, nothing
//! is cached and the next call tries again.

use tokio::sync::OnceCell;

use crate::config::ClientConfig;
use crate::envelope::{build_envelope, Payload};
use crate::error::A2AResult;
use crate::extract::{extract_detailed, Extraction, StructuredMessage};
use crate::types::{SendMessageResponse, Task};
use crate::utils::constants::A2UI_EXTENSION_URI;
use crate::utils::extensions::find_extension_by_uri;

use super::a2a_client::A2AClient;
use super::card_resolver::CardResolver;
use super::poller::{PollStop, TaskPoller};
use super::transport::{Transport, TransportConfig};

/// How the polling phase of a send went.
#[derive(Debug, Clone)]
pub struct PollReport {
    /// Successful `tasks/get` calls.
    pub attempts: u32,
    /// Why polling stopped.
    pub stop: PollStop,
}

/// Full result of [`A2uiClient::send_detailed`].
#[derive(Debug, Clone)]
pub struct SendOutcome {
    /// The task snapshot extraction ran on. `None` if the agent replied with
    /// a direct message.
    pub task: Option<Task>,
    /// Polling summary. `None` if no task was returned.
    pub polling: Option<PollReport>,
    /// What was extracted from the task.
    pub extraction: Extraction,
}

impl SendOutcome {
    /// The structured messages, consuming the outcome.
    pub fn into_messages(self) -> Vec<StructuredMessage> {
        self.extraction.messages
    }
}

/// Client for an A2UI-capable agent.
///
/// # Example
///
/// ```no_run
/// use a2ui_client::client::A2uiClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = A2uiClient::new("http://localhost:10002");
/// for message in client.send("Show me my open tickets").await? {
///     println!("{}", message.as_value());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct A2uiClient {
    config: ClientConfig,
    connection: OnceCell<A2AClient>,
}

impl A2uiClient {
    /// Create a client with default settings for the given agent base URL.
    ///
    /// Nothing is fetched until the first send.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(server_url))
    }

    /// Create a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            connection: OnceCell::new(),
        }
    }

    /// Create a client over a ready-made transport, skipping discovery.
    ///
    /// Only the poll policy of `config` is used.
    pub fn with_transport(transport: Box<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            config,
            connection: OnceCell::new_with(Some(A2AClient::with_transport(transport))),
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Set up the connection now instead of on the first send.
    ///
    /// # Errors
    ///
    /// Returns the discovery error, if any. A failed attempt is not cached.
    pub async fn connect(&self) -> A2AResult<&A2AClient> {
        self.connection().await
    }

    /// Whether the connection has been set up.
    pub fn is_connected(&self) -> bool {
        self.connection.initialized()
    }

    async fn connection(&self) -> A2AResult<&A2AClient> {
        self.connection
            .get_or_try_init(|| async {
                self.config.validate()?;

                let transport_config = TransportConfig {
                    timeout: self.config.timeout,
                    headers: self.config.request_headers(),
                };
                let http = transport_config.build_http_client()?;

                let mut resolver = CardResolver::with_client(http.clone());
                if let Some(path) = &self.config.card_path {
                    resolver = resolver.with_card_path(path.clone());
                }
                let card = resolver.resolve(&self.config.server_url).await?;

                if find_extension_by_uri(&card, A2UI_EXTENSION_URI).is_some() {
                    tracing::debug!("agent '{}' advertises the A2UI extension", card.name);
                } else {
                    tracing::debug!(
                        "agent '{}' does not advertise {}",
                        card.name,
                        A2UI_EXTENSION_URI
                    );
                }

                A2AClient::from_card(card, http)
            })
            .await
    }

    /// Send a payload and return the structured messages to render.
    ///
    /// An empty result is a normal outcome: the agent produced nothing
    /// structured, or polling gave up before it did.
    ///
    /// # Errors
    ///
    /// Fails only if the connection cannot be set up or `message/send` fails.
    /// Errors while polling are logged and do not fail the call.
    pub async fn send(&self, payload: impl Into<Payload>) -> A2AResult<Vec<StructuredMessage>> {
        Ok(self.send_detailed(payload).await?.into_messages())
    }

    /// Like [`send`](Self::send), but also report the final task, how
    /// polling ended and where the messages were found.
    pub async fn send_detailed(&self, payload: impl Into<Payload>) -> A2AResult<SendOutcome> {
        let client = self.connection().await?;
        let envelope = build_envelope(payload);

        let task = match client.submit(envelope).await? {
            SendMessageResponse::Task(task) => task,
            SendMessageResponse::Message(message) => {
                tracing::warn!(
                    "agent replied with message {} instead of a task, nothing to render",
                    message.message_id
                );
                return Ok(SendOutcome {
                    task: None,
                    polling: None,
                    extraction: Extraction::empty(),
                });
            }
        };

        let outcome = TaskPoller::new(client, self.config.poll).resolve(task).await;
        let extraction = extract_detailed(&outcome.task);
        if extraction.is_empty() {
            tracing::warn!(
                "no structured messages in task {} (state {})",
                outcome.task.id,
                outcome.task.status.state
            );
        }

        Ok(SendOutcome {
            task: Some(outcome.task),
            polling: Some(PollReport {
                attempts: outcome.attempts,
                stop: outcome.stop,
            }),
            extraction,
        })
    }
}
