//! Client configuration.
//!
//! Plain structs with defaults; [`crate::builders::ClientBuilder`] offers a
//! fluent way to fill them in.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::{A2AError, A2AResult};
use crate::utils::constants::A2UI_EXTENSION_URI;
use crate::utils::extensions::{extension_header_value, HTTP_EXTENSION_HEADER};

/// Default number of `tasks/get` calls made while a task is still pending.
pub const DEFAULT_POLL_ATTEMPTS: u32 = 3;

/// Default wait before each `tasks/get` call.
pub const DEFAULT_POLL_DELAY: Duration = Duration::from_millis(1000);

/// Default timeout for each HTTP request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Bounded, fixed-delay polling.
///
/// Each attempt sleeps for `delay` and then fetches the task once. There is
/// no backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Maximum number of fetches. Zero disables polling.
    pub max_attempts: u32,
    /// Wait before each fetch.
    pub delay: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_POLL_ATTEMPTS,
            delay: DEFAULT_POLL_DELAY,
        }
    }
}

impl PollPolicy {
    /// A policy that never polls.
    pub fn disabled() -> Self {
        Self {
            max_attempts: 0,
            delay: Duration::ZERO,
        }
    }

    /// Upper bound on the time spent sleeping between fetches.
    pub fn max_wait(&self) -> Duration {
        self.delay.saturating_mul(self.max_attempts)
    }
}

/// Everything needed to reach an A2UI-capable agent.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the agent; the card is looked up under it.
    pub server_url: String,
    /// Custom agent card path. `None` uses the well-known path.
    pub card_path: Option<String>,
    /// Extension URIs sent in `X-A2A-Extensions`. Defaults to A2UI v0.8.
    pub extensions: Vec<String>,
    /// Extra headers sent with every request.
    pub headers: HashMap<String, String>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Polling behaviour for tasks that are still running.
    pub poll: PollPolicy,
}

impl ClientConfig {
    /// Configuration with defaults for the given server.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            card_path: None,
            extensions: vec![A2UI_EXTENSION_URI.to_string()],
            headers: HashMap::new(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            poll: PollPolicy::default(),
        }
    }

    /// Check the configuration before any request is made.
    ///
    /// # Errors
    ///
    /// Returns [`A2AError::InvalidConfig`] if the server URL is blank or is
    /// not an http(s) URL.
    pub fn validate(&self) -> A2AResult<()> {
        let url = self.server_url.trim();
        if url.is_empty() {
            return Err(A2AError::InvalidConfig(
                "server URL must not be empty".to_string(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(A2AError::InvalidConfig(format!(
                "server URL must start with http:// or https://, got '{url}'"
            )));
        }
        Ok(())
    }

    /// Headers to attach to every outgoing request, including the
    /// extension header.
    ///
    /// A caller-supplied `X-A2A-Extensions` header (any casing) is replaced
    /// by the value built from [`ClientConfig::extensions`].
    pub fn request_headers(&self) -> HashMap<String, String> {
        let mut headers: HashMap<String, String> = self
            .headers
            .iter()
            .filter(|(k, _)| !k.eq_ignore_ascii_case(HTTP_EXTENSION_HEADER))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        if let Some(value) = extension_header_value(&self.extensions) {
            headers.insert(HTTP_EXTENSION_HEADER.to_string(), value);
        }
        headers
    }
}
