//! Full round-trip tests: A2uiClient → reqwest → in-process axum agent.
//!
//! Covers discovery (well-known path, legacy fallback, custom path), the
//! extension header on every request, connection caching and error
//! propagation over real HTTP.

mod common;

use std::time::Duration;

use a2ui_client::builders::ClientBuilder;
use a2ui_client::client::{A2uiClient, PollStop};
use a2ui_client::config::PollPolicy;
use a2ui_client::error::A2AError;
use a2ui_client::utils::constants::A2UI_EXTENSION_URI;
use a2ui_client::utils::extensions::HTTP_EXTENSION_HEADER;
use common::{data_part, rpc_error, task_json, CardLocation, MockAgent};
use serde_json::json;

const CARD_PATH: &str = "/.well-known/agent-card.json";
const LEGACY_CARD_PATH: &str = "/.well-known/agent.json";

fn no_delay() -> PollPolicy {
    PollPolicy {
        max_attempts: 3,
        delay: Duration::ZERO,
    }
}

fn client_for(agent: &MockAgent) -> A2uiClient {
    ClientBuilder::new(agent.base_url.clone())
        .with_poll_policy(no_delay())
        .build()
}

fn completed(data: serde_json::Value) -> serde_json::Value {
    task_json("t-1", "completed", Some(vec![data_part(data)]))
}

// ===========================================================================
// Discovery
// ===========================================================================

#[tokio::test]
async fn send_discovers_card_then_submits() {
    let surface = json!({"beginRendering": {"surfaceId": "s"}});
    let agent = MockAgent::start(vec![Ok(completed(surface.clone()))]).await;
    let client = client_for(&agent);

    let messages = client.send("hello").await.unwrap();

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].as_value(), &surface);
    assert_eq!(agent.paths(), vec![CARD_PATH, "/a2a"]);
    assert_eq!(agent.rpc_methods(), vec!["message/send"]);
}

#[tokio::test]
async fn legacy_card_path_is_tried_after_404() {
    let agent = MockAgent::start_with(CardLocation::Legacy, vec![Ok(completed(json!({})))]).await;
    let client = client_for(&agent);

    client.send("hello").await.unwrap();

    assert_eq!(agent.paths(), vec![CARD_PATH, LEGACY_CARD_PATH, "/a2a"]);
}

#[tokio::test]
async fn custom_card_path_skips_well_known() {
    let agent = MockAgent::start_with(
        CardLocation::Custom("/agents/ui/card.json"),
        vec![Ok(completed(json!({})))],
    )
    .await;
    let client = ClientBuilder::new(agent.base_url.clone())
        .with_card_path("agents/ui/card.json")
        .with_poll_policy(no_delay())
        .build();

    client.send("hello").await.unwrap();

    assert_eq!(agent.paths(), vec!["/agents/ui/card.json", "/a2a"]);
}

#[tokio::test]
async fn missing_card_fails_and_is_retried_next_time() {
    let agent = MockAgent::start_with(CardLocation::Custom("/elsewhere.json"), vec![]).await;
    let client = client_for(&agent);

    let err = client.send("hello").await.unwrap_err();
    assert!(matches!(err, A2AError::Http { status: 404, .. }));
    assert!(!client.is_connected());

    let _ = client.send("hello").await;
    assert_eq!(
        agent.paths(),
        vec![CARD_PATH, LEGACY_CARD_PATH, CARD_PATH, LEGACY_CARD_PATH]
    );
}

#[tokio::test]
async fn connection_is_built_once() {
    let agent = MockAgent::start(vec![
        Ok(completed(json!({"n": 1}))),
        Ok(completed(json!({"n": 2}))),
    ])
    .await;
    let client = client_for(&agent);

    client.send("one").await.unwrap();
    client.send("two").await.unwrap();

    assert_eq!(agent.paths(), vec![CARD_PATH, "/a2a", "/a2a"]);
}

#[tokio::test]
async fn connect_resolves_card_eagerly() {
    let agent = MockAgent::start(vec![]).await;

    let client = ClientBuilder::new(agent.base_url.clone())
        .connect()
        .await
        .unwrap();

    assert!(client.is_connected());
    assert_eq!(agent.paths(), vec![CARD_PATH]);
    assert!(agent.rpc_methods().is_empty());
}

// ===========================================================================
// Headers
// ===========================================================================

#[tokio::test]
async fn every_request_carries_the_extension_header() {
    let agent = MockAgent::start(vec![
        Ok(task_json("t-1", "working", None)),
        Ok(completed(json!({}))),
    ])
    .await;
    let client = client_for(&agent);

    client.send("hello").await.unwrap();

    let requests = agent.requests();
    assert_eq!(requests.len(), 3);
    for request in requests {
        assert_eq!(
            request.header(HTTP_EXTENSION_HEADER).as_deref(),
            Some(A2UI_EXTENSION_URI),
            "missing on {}",
            request.path
        );
    }
}

#[tokio::test]
async fn extra_headers_and_extensions_are_sent() {
    let agent = MockAgent::start(vec![Ok(completed(json!({})))]).await;
    let client = ClientBuilder::new(agent.base_url.clone())
        .with_bearer_token("s3cret")
        .with_extension("https://example.com/ext/v1")
        .with_poll_policy(no_delay())
        .build();

    client.send("hello").await.unwrap();

    let rpc = agent
        .requests()
        .into_iter()
        .find(|r| r.rpc_method.is_some())
        .unwrap();
    assert_eq!(rpc.header("authorization").as_deref(), Some("Bearer s3cret"));
    assert_eq!(
        rpc.header(HTTP_EXTENSION_HEADER),
        Some(format!("{A2UI_EXTENSION_URI},https://example.com/ext/v1"))
    );
}

// ===========================================================================
// Submit and poll over HTTP
// ===========================================================================

#[tokio::test]
async fn pending_task_is_polled_over_http() {
    let agent = MockAgent::start(vec![
        Ok(task_json("t-7", "submitted", None)),
        Ok(task_json("t-7", "working", None)),
        Ok(task_json("t-7", "completed", Some(vec![data_part(json!({"ok": true}))]))),
    ])
    .await;
    let client = client_for(&agent);

    let outcome = client.send_detailed("hello").await.unwrap();

    assert_eq!(outcome.extraction.messages[0].as_value(), &json!({"ok": true}));
    assert_eq!(outcome.polling.unwrap().attempts, 2);
    assert_eq!(
        agent.rpc_methods(),
        vec!["message/send", "tasks/get", "tasks/get"]
    );
    let get = &agent.requests()[2];
    assert_eq!(get.params, json!({"id": "t-7"}));
}

#[tokio::test]
async fn sent_envelope_has_one_text_part() {
    let agent = MockAgent::start(vec![Ok(completed(json!({})))]).await;
    let client = client_for(&agent);

    client.send("plain words").await.unwrap();

    let send = &agent.requests()[1];
    assert_eq!(
        send.params["message"]["parts"],
        json!([{"kind": "text", "text": "plain words"}])
    );
}

#[tokio::test]
async fn submit_error_propagates_over_http() {
    let agent = MockAgent::start(vec![rpc_error(-32602, "bad message")]).await;
    let client = client_for(&agent);

    let err = client.send("hello").await.unwrap_err();

    assert!(err.is_protocol());
    assert_eq!(err.code(), -32602);
    assert!(err.to_string().contains("bad message"));
}

#[tokio::test]
async fn poll_error_over_http_is_swallowed() {
    let agent = MockAgent::start(vec![
        Ok(task_json("t-1", "working", None)),
        rpc_error(-32001, "task not found"),
    ])
    .await;
    let client = client_for(&agent);

    let outcome = client.send_detailed("hello").await.unwrap();

    assert!(outcome.extraction.is_empty());
    assert!(matches!(
        outcome.polling.unwrap().stop,
        PollStop::Interrupted(A2AError::JsonRpc { code: -32001, .. })
    ));
}
