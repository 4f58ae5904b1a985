//! Utility functions for working with A2A Part objects.

use crate::types::Part;
use serde_json::Value;

/// Extracts text content from all text Parts, in order.
///
/// # Example
///
/// ```
/// use a2ui_client::types::Part;
/// use a2ui_client::utils::get_text_parts;
///
/// let parts = vec![Part::text("Hello"), Part::text("World")];
/// assert_eq!(get_text_parts(&parts), vec!["Hello", "World"]);
/// ```
pub fn get_text_parts<'a>(parts: impl IntoIterator<Item = &'a Part>) -> Vec<String> {
    parts
        .into_iter()
        .filter_map(|part| match part {
            Part::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

/// Extracts data content from all data Parts, in order.
///
/// The mime type is not checked; any data part qualifies.
///
/// # Example
///
/// ```
/// use a2ui_client::types::Part;
/// use a2ui_client::utils::get_data_parts;
/// use serde_json::json;
///
/// let parts = vec![Part::text("skip me"), Part::data(json!({"key": "value"}))];
/// assert_eq!(get_data_parts(&parts), vec![json!({"key": "value"})]);
/// ```
pub fn get_data_parts<'a>(parts: impl IntoIterator<Item = &'a Part>) -> Vec<Value> {
    parts
        .into_iter()
        .filter_map(|part| match part {
            Part::Data { data, .. } => Some(data.clone()),
            _ => None,
        })
        .collect()
}
