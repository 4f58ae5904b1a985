//! Agent card discovery and resolution.
//!
//! Implements the well-known URI convention for discovering A2A agent cards.
//! The card tells the client where the JSON-RPC endpoint lives and which
//! extensions the agent understands.

use crate::error::{A2AError, A2AResult};
use crate::types::AgentCard;
use crate::utils::constants::{AGENT_CARD_WELL_KNOWN_PATH, PREV_AGENT_CARD_WELL_KNOWN_PATH};

/// Resolves [`AgentCard`]s from agent base URLs.
///
/// Fetches the agent card from `{base_url}/.well-known/agent-card.json` and
/// deserializes it into an [`AgentCard`].
///
/// # Example
///
/// ```no_run
/// use a2ui_client::client::CardResolver;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = CardResolver::new();
/// let card = resolver.resolve("http://localhost:10002").await?;
/// println!("Agent: {} v{}", card.name, card.version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CardResolver {
    client: reqwest::Client,
    /// Override the default agent card path. If `None`, uses the well-known
    /// path with fallback to the pre-0.3 one.
    card_path: Option<String>,
}

impl CardResolver {
    /// Create a new resolver with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new resolver with an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            card_path: None,
        }
    }

    /// Override the agent card path.
    pub fn with_card_path(mut self, path: impl Into<String>) -> Self {
        self.card_path = Some(path.into());
        self
    }

    /// Fetch and parse the agent card from the given base URL.
    ///
    /// With the default path, a 404 on `/.well-known/agent-card.json` is
    /// retried once against `/.well-known/agent.json`. A custom path is
    /// fetched as-is with no fallback.
    ///
    /// # Errors
    ///
    /// Returns [`A2AError::Transport`] on connection failures, [`A2AError::Http`]
    /// on non-2xx responses, and [`A2AError::InvalidJson`] on parse failures.
    pub async fn resolve(&self, base_url: &str) -> A2AResult<AgentCard> {
        let base = base_url.trim_end_matches('/');

        if let Some(path) = self.card_path.as_deref() {
            return self.fetch_card(base, path).await;
        }

        match self.fetch_card(base, AGENT_CARD_WELL_KNOWN_PATH).await {
            Ok(card) => Ok(card),
            Err(A2AError::Http { status: 404, .. }) => {
                tracing::debug!(
                    "agent card not found at {}{}, trying fallback path {}",
                    base,
                    AGENT_CARD_WELL_KNOWN_PATH,
                    PREV_AGENT_CARD_WELL_KNOWN_PATH,
                );
                self.fetch_card(base, PREV_AGENT_CARD_WELL_KNOWN_PATH).await
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch and parse an agent card from a specific path relative to a base URL.
    async fn fetch_card(&self, base: &str, path: &str) -> A2AResult<AgentCard> {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        let url = format!("{base}{path}");

        tracing::debug!("resolving agent card from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    A2AError::Transport(format!("failed to connect to agent at {url}: {e}"))
                } else if e.is_timeout() {
                    A2AError::Timeout(format!("timed out fetching agent card from {url}: {e}"))
                } else {
                    A2AError::Transport(format!("failed to fetch agent card from {url}: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(A2AError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| A2AError::Transport(format!("failed to read agent card response: {e}")))?;

        let card: AgentCard = serde_json::from_slice(&bytes)
            .map_err(|e| A2AError::InvalidJson(format!("failed to parse agent card: {e}")))?;

        tracing::debug!("resolved agent card: {} v{}", card.name, card.version);

        Ok(card)
    }

    /// Extract the JSON-RPC endpoint URL from an agent card.
    ///
    /// Looks for the first interface with `transport` of `"JSONRPC"`
    /// (case-insensitive) in `supportedInterfaces`, then in
    /// `additionalInterfaces`, and finally falls back to the card's `url`.
    ///
    /// Returns `None` if none of those yield a URL.
    pub fn get_a2a_url(card: &AgentCard) -> Option<String> {
        let additional = card.additional_interfaces.as_deref().unwrap_or_default();

        card.supported_interfaces
            .iter()
            .chain(additional)
            .find(|iface| iface.transport.eq_ignore_ascii_case("JSONRPC"))
            .map(|iface| iface.url.clone())
            .or_else(|| (!card.url.is_empty()).then(|| card.url.clone()))
    }
}

impl Default for CardResolver {
    fn default() -> Self {
        Self::new()
    }
}
