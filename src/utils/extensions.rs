//! Extension utility functions.
//!
//! Helpers for the `X-A2A-Extensions` header and the extensions an agent card
//! advertises.

use crate::types::{AgentCard, AgentExtension};
use std::collections::HashSet;

/// HTTP header for A2A extensions.
pub const HTTP_EXTENSION_HEADER: &str = "X-A2A-Extensions";

/// Build the `X-A2A-Extensions` header value for a list of extension URIs.
///
/// Duplicates and blank entries are dropped; order of first occurrence is kept.
/// Returns `None` when nothing is left to advertise.
///
/// # Example
/// ```
/// use a2ui_client::utils::extension_header_value;
///
/// let value = extension_header_value(&["a".to_string(), " ".to_string(), "b".to_string(), "a".to_string()]);
/// assert_eq!(value.as_deref(), Some("a,b"));
/// ```
pub fn extension_header_value(extensions: &[String]) -> Option<String> {
    let mut seen = HashSet::new();
    let uris: Vec<&str> = extensions
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && seen.insert(*s))
        .collect();

    if uris.is_empty() {
        None
    } else {
        Some(uris.join(","))
    }
}

/// Find an AgentExtension in an AgentCard by URI.
///
/// Returns `None` if no extension with the given URI is found.
pub fn find_extension_by_uri<'a>(card: &'a AgentCard, uri: &str) -> Option<&'a AgentExtension> {
    card.capabilities
        .extensions
        .as_ref()?
        .iter()
        .find(|ext| ext.uri == uri)
}
