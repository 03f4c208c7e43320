use anyhow::Result;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use a2a_relay::a2a::client::A2ARemoteAgent;
use a2a_relay::a2a::configs::A2AConfig;
use a2a_relay::a2a::extract::NO_CONTENT_NOTICE;
use a2a_relay::agent::Relay;
use a2a_relay::models::role::Role;
use a2a_relay::systems::{A2ASystem, A2A_ERROR_PREFIX};

fn relay_for(base_url: &str) -> Result<Relay> {
    let remote = A2ARemoteAgent::new(A2AConfig::new(base_url, Duration::from_secs(5)));
    Ok(Relay::from_systems(vec![Box::new(A2ASystem::new(
        Box::new(remote),
    ))])?)
}

/// Serves an agent card pointing at `/` and answers every message with `reply`
async fn mock_agent(reply: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/agent.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Currency Agent",
            "url": format!("{}/", server.uri())
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_relay_answers_from_artifacts() -> Result<()> {
    let server = mock_agent(json!({
        "jsonrpc": "2.0",
        "id": "1",
        "result": {
            "kind": "task",
            "artifacts": [{"parts": [{"kind": "text", "text": "1 USD is 0.92 EUR"}]}],
            "status": {"state": "completed"}
        }
    }))
    .await;
    let relay = relay_for(&server.uri())?;

    let state = relay.run("How much is 1 USD in EUR?").await?;
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.last_a2a_response, "1 USD is 0.92 EUR");

    let last = state.messages.last().unwrap();
    assert_eq!(last.role, Role::Tool);
    assert_eq!(last.text(), "1 USD is 0.92 EUR");
    Ok(())
}

#[tokio::test]
async fn test_relay_sends_the_user_query() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/agent.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Currency Agent",
            "url": format!("{}/", server.uri())
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "method": "message/send",
            "params": {"message": {"parts": [{"kind": "text", "text": "What can you do?"}]}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": "1",
            "result": {"kind": "message", "history": [
                {"role": "agent", "parts": [{"kind": "text", "text": "Convert currencies"}]}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;
    let relay = relay_for(&server.uri())?;

    let message = relay.ask("What can you do?").await?.expect("a reply");
    assert_eq!(message.text(), "Convert currencies");
    Ok(())
}

#[tokio::test]
async fn test_relay_reports_jsonrpc_error_as_text() -> Result<()> {
    let server = mock_agent(json!({
        "jsonrpc": "2.0",
        "id": "1",
        "error": {"code": -32603, "message": "Internal error"}
    }))
    .await;
    let relay = relay_for(&server.uri())?;

    let message = relay.ask("hello").await?.expect("a reply");
    let text = message.text();
    assert!(text.starts_with(A2A_ERROR_PREFIX));
    assert!(text.contains("-32603"));
    Ok(())
}

#[tokio::test]
async fn test_relay_without_text_content() -> Result<()> {
    let server = mock_agent(json!({
        "jsonrpc": "2.0",
        "id": "1",
        "result": {"kind": "task", "status": {"state": "working"}}
    }))
    .await;
    let relay = relay_for(&server.uri())?;

    let message = relay.ask("hello").await?.expect("a reply");
    assert_eq!(message.text(), NO_CONTENT_NOTICE);
    Ok(())
}

#[tokio::test]
async fn test_relay_unreachable_agent() -> Result<()> {
    // Nothing listens on port 1
    let relay = relay_for("http://127.0.0.1:1")?;

    let message = relay.ask("hello").await?.expect("a reply");
    assert!(message.text().starts_with(A2A_ERROR_PREFIX));
    Ok(())
}

#[tokio::test]
async fn test_relay_input_required_task_returns_agent_prompt() -> Result<()> {
    let server = mock_agent(json!({
        "jsonrpc": "2.0",
        "id": "1",
        "result": {
            "kind": "task",
            "history": [
                {"role": "user", "messageId": "u1", "parts": [{"kind": "text", "text": "How much is 100 USD?"}]}
            ],
            "status": {
                "state": "input-required",
                "message": {"role": "agent", "messageId": "a1", "parts": [{"kind": "text", "text": "To which currency?"}]}
            }
        }
    }))
    .await;
    let relay = relay_for(&server.uri())?;

    let message = relay.ask("How much is 100 USD?").await?.expect("a reply");
    assert_eq!(message.text(), "To which currency?");
    Ok(())
}

#[tokio::test]
async fn test_relay_ignores_unknown_part_kinds() -> Result<()> {
    let server = mock_agent(json!({
        "jsonrpc": "2.0",
        "id": "1",
        "result": {
            "artifacts": [{"parts": [
                {"kind": "text", "text": "answer"},
                {"kind": "video", "uri": "https://example.com/clip.mp4"}
            ]}]
        }
    }))
    .await;
    let relay = relay_for(&server.uri())?;

    let message = relay.ask("hello").await?.expect("a reply");
    assert_eq!(message.text(), "answer");
    Ok(())
}
