//! Builder patterns for ergonomic construction of the client.

use std::time::Duration;

use crate::config::{ClientConfig, PollPolicy};

/// Builder for [`crate::client::A2uiClient`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// use a2ui_client::builders::ClientBuilder;
/// use std::time::Duration;
///
/// let client = ClientBuilder::new("http://localhost:10002")
///     .with_timeout(Duration::from_secs(30))
///     .with_bearer_token("secret")
///     .connect()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Create a new client builder for the given agent base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(url),
        }
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a custom HTTP header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.headers.insert(key.into(), value.into());
        self
    }

    /// Add an Authorization header with a bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", token.into()),
        );
        self
    }

    /// Request an additional protocol extension alongside A2UI.
    pub fn with_extension(mut self, uri: impl Into<String>) -> Self {
        let uri = uri.into();
        if !self.config.extensions.contains(&uri) {
            self.config.extensions.push(uri);
        }
        self
    }

    /// Fetch the agent card from a custom path instead of the well-known one.
    pub fn with_card_path(mut self, path: impl Into<String>) -> Self {
        self.config.card_path = Some(path.into());
        self
    }

    /// Set how pending tasks are polled.
    pub fn with_poll_policy(mut self, policy: PollPolicy) -> Self {
        self.config.poll = policy;
        self
    }

    /// The configuration built so far.
    pub fn into_config(self) -> ClientConfig {
        self.config
    }

    /// Build the client. Discovery happens on the first send.
    #[cfg(feature = "client")]
    pub fn build(self) -> crate::client::A2uiClient {
        crate::client::A2uiClient::with_config(self.config)
    }

    /// Build the client and resolve the agent card right away.
    ///
    /// # Errors
    ///
    /// Returns the configuration or discovery error.
    #[cfg(feature = "client")]
    pub async fn connect(self) -> crate::A2AResult<crate::client::A2uiClient> {
        let client = self.build();
        client.connect().await?;
        Ok(client)
    }
}
