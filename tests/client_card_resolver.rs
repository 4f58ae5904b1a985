//! Tests for agent card discovery and endpoint selection.

mod common;

use a2ui_client::client::{A2AClient, CardResolver};
use a2ui_client::error::A2AError;
use a2ui_client::types::AgentCard;
use a2ui_client::utils::constants::A2UI_EXTENSION_URI;
use a2ui_client::utils::extensions::find_extension_by_uri;
use common::{CardLocation, MockAgent};
use serde_json::json;

fn card(value: serde_json::Value) -> AgentCard {
    serde_json::from_value(value).unwrap()
}

// ===========================================================================
// get_a2a_url
// ===========================================================================

#[test]
fn supported_jsonrpc_interface_wins() {
    let card = card(json!({
        "name": "a",
        "url": "http://fallback",
        "supportedInterfaces": [
            {"url": "http://grpc", "transport": "GRPC"},
            {"url": "http://rpc", "transport": "JSONRPC"}
        ],
        "additionalInterfaces": [{"url": "http://additional", "transport": "JSONRPC"}]
    }));
    assert_eq!(CardResolver::get_a2a_url(&card).as_deref(), Some("http://rpc"));
}

#[test]
fn additional_interfaces_are_second() {
    let card = card(json!({
        "name": "a",
        "url": "http://fallback",
        "supportedInterfaces": [{"url": "http://rest", "transport": "HTTP+JSON"}],
        "additionalInterfaces": [{"url": "http://additional", "transport": "jsonrpc"}]
    }));
    assert_eq!(
        CardResolver::get_a2a_url(&card).as_deref(),
        Some("http://additional")
    );
}

#[test]
fn card_url_is_last_resort() {
    let card = card(json!({"name": "a", "url": "http://fallback"}));
    assert_eq!(
        CardResolver::get_a2a_url(&card).as_deref(),
        Some("http://fallback")
    );
}

#[test]
fn no_endpoint_at_all() {
    let card = card(json!({"name": "a"}));
    assert_eq!(CardResolver::get_a2a_url(&card), None);

    let err = A2AClient::from_card(card, reqwest::Client::new()).unwrap_err();
    assert!(matches!(err, A2AError::Transport(_)));
}

#[test]
fn minimal_card_decodes_with_defaults() {
    let card = card(json!({"name": "bare"}));
    assert!(card.supported_interfaces.is_empty());
    assert!(card.capabilities.extensions.is_none());
    assert!(find_extension_by_uri(&card, A2UI_EXTENSION_URI).is_none());
}

// ===========================================================================
// resolve over HTTP
// ===========================================================================

#[tokio::test]
async fn resolve_fetches_well_known_card() {
    let agent = MockAgent::start(vec![]).await;

    let card = CardResolver::new().resolve(&agent.base_url).await.unwrap();

    assert_eq!(card.name, "Mock A2UI Agent");
    assert_eq!(card.version, "0.1.0");
    assert!(find_extension_by_uri(&card, A2UI_EXTENSION_URI).is_some());
    assert_eq!(
        CardResolver::get_a2a_url(&card),
        Some(format!("{}/a2a", agent.base_url))
    );
}

#[tokio::test]
async fn resolve_tolerates_trailing_slash() {
    let agent = MockAgent::start(vec![]).await;

    CardResolver::new()
        .resolve(&format!("{}/", agent.base_url))
        .await
        .unwrap();

    assert_eq!(agent.paths(), vec!["/.well-known/agent-card.json"]);
}

#[tokio::test]
async fn resolve_falls_back_to_legacy_path() {
    let agent = MockAgent::start_with(CardLocation::Legacy, vec![]).await;

    let card = CardResolver::new().resolve(&agent.base_url).await.unwrap();

    assert_eq!(card.name, "Mock A2UI Agent");
    assert_eq!(
        agent.paths(),
        vec!["/.well-known/agent-card.json", "/.well-known/agent.json"]
    );
}

#[tokio::test]
async fn custom_path_has_no_fallback() {
    let agent = MockAgent::start(vec![]).await;

    let err = CardResolver::new()
        .with_card_path("/nope.json")
        .resolve(&agent.base_url)
        .await
        .unwrap_err();

    assert!(matches!(err, A2AError::Http { status: 404, .. }));
    assert_eq!(agent.paths(), vec!["/nope.json"]);
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let err = CardResolver::new()
        .resolve("http://127.0.0.1:1")
        .await
        .unwrap_err();
    assert!(err.is_transport());
}
