// Provider client tests - wire format and failure normalization
//
// Each client is pointed at a wiremock server standing in for the real API.

#[path = "../common/mod.rs"]
mod common;

use chatgate_core::config::{CloudProviderConfig, LocalProviderConfig};
use chatgate_core::model::clients::{AnthropicClient, OllamaClient, OpenAIClient};
use chatgate_core::model::factory::ProviderFactory;
use chatgate_core::model::{ErrorKind, ModelClient, Provider};
use chatgate_core::types::ChatMessage;
use common::{conversation, unreachable_url};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http() -> Client {
    ProviderFactory::http_client(Duration::from_secs(5)).expect("http client")
}

fn local_client(endpoint: &str) -> OllamaClient {
    let config = LocalProviderConfig {
        endpoint: endpoint.to_string(),
    };
    OllamaClient::from_config(&config, http())
}

fn cloud_a_client(endpoint: &str, key: Option<&str>) -> OpenAIClient {
    let mut config = CloudProviderConfig::cloud_a_defaults();
    config.endpoint = endpoint.to_string();
    if let Some(key) = key {
        config = config.with_api_key(key);
    }
    OpenAIClient::from_config(&config, http())
}

fn cloud_b_client(endpoint: &str, key: Option<&str>) -> AnthropicClient {
    let mut config = CloudProviderConfig::cloud_b_defaults();
    config.endpoint = endpoint.to_string();
    if let Some(key) = key {
        config = config.with_api_key(key);
    }
    AnthropicClient::from_config(&config, http())
}

async fn sent_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1, "exactly one upstream call");
    requests[0].body_json().expect("json body")
}

fn sent_messages(body: &Value) -> Vec<(String, String)> {
    body["messages"]
        .as_array()
        .expect("messages array")
        .iter()
        .map(|m| {
            (
                m["role"].as_str().expect("role").to_string(),
                m["content"].as_str().expect("content").to_string(),
            )
        })
        .collect()
}

fn expected_messages(messages: &[ChatMessage]) -> Vec<(String, String)> {
    messages
        .iter()
        .map(|m| (m.role.as_str().to_string(), m.content.clone()))
        .collect()
}

// ============================================================================
// local
// ============================================================================

#[tokio::test]
async fn local_returns_message_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({"model": "modelX", "stream": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "modelX",
            "message": {"role": "assistant", "content": "hello"},
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = local_client(&server.uri())
        .chat("modelX", &[ChatMessage::user("hi")])
        .await
        .expect("reply");

    assert_eq!(reply, "hello");
}

#[tokio::test]
async fn local_payload_preserves_order_for_one_and_fifty_messages() {
    for len in [1, 50] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": {"role": "assistant", "content": "ok"}
            })))
            .mount(&server)
            .await;

        let history = conversation(len);
        local_client(&server.uri())
            .chat("m", &history)
            .await
            .expect("reply");

        let body = sent_body(&server).await;
        assert_eq!(sent_messages(&body), expected_messages(&history), "len {len}");
    }
}

#[tokio::test]
async fn local_reply_is_returned_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": {"role": "assistant", "content": "  spaced out\n\n"}
        })))
        .mount(&server)
        .await;

    let reply = local_client(&server.uri())
        .chat("m", &[ChatMessage::user("hi")])
        .await
        .expect("reply");

    assert_eq!(reply, "  spaced out\n\n");
}

#[tokio::test]
async fn local_missing_message_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "hello"})))
        .mount(&server)
        .await;

    let err = local_client(&server.uri())
        .chat("m", &[ChatMessage::user("hi")])
        .await
        .expect_err("malformed");

    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    assert_eq!(err.provider(), Some(Provider::Local));
}

#[tokio::test]
async fn local_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&server)
        .await;

    let err = local_client(&server.uri())
        .chat("m", &[ChatMessage::user("hi")])
        .await
        .expect_err("malformed");

    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn local_empty_reply_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": {"role": "assistant", "content": ""}
        })))
        .mount(&server)
        .await;

    let err = local_client(&server.uri())
        .chat("m", &[ChatMessage::user("hi")])
        .await
        .expect_err("empty reply");

    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn local_server_error_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error":"model 'nope' not found"}"#),
        )
        .mount(&server)
        .await;

    let err = local_client(&server.uri())
        .chat("nope", &[ChatMessage::user("hi")])
        .await
        .expect_err("backend error");

    assert_eq!(err.kind(), ErrorKind::BackendError);
    assert_eq!(err.upstream_status(), Some(404));
    assert!(err.detail().contains("model 'nope' not found"));
}

#[tokio::test]
async fn long_error_body_is_truncated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("e".repeat(10_000)))
        .mount(&server)
        .await;

    let err = local_client(&server.uri())
        .chat("m", &[ChatMessage::user("hi")])
        .await
        .expect_err("backend error");

    assert_eq!(err.detail().len(), 2048);
}

#[tokio::test]
async fn local_connection_refused_is_connection_failure() {
    let err = local_client(&unreachable_url())
        .chat("m", &[ChatMessage::user("hi")])
        .await
        .expect_err("unreachable");

    assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
    assert!(!err.detail().is_empty());
}

#[tokio::test]
async fn slow_backend_hits_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": {"content": "late"}}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let http = ProviderFactory::http_client(Duration::from_millis(200)).expect("http client");
    let client = OllamaClient::from_config(
        &LocalProviderConfig {
            endpoint: server.uri(),
        },
        http,
    );

    let err = client
        .chat("m", &[ChatMessage::user("hi")])
        .await
        .expect_err("timeout");

    assert_eq!(err.kind(), ErrorKind::ConnectionFailure);
}

// ============================================================================
// cloud-a
// ============================================================================

#[tokio::test]
async fn cloud_a_sends_bearer_and_reads_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({"model": "gpt-x", "stream": false})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let history = vec![ChatMessage::system("be brief"), ChatMessage::user("hi")];
    let reply = cloud_a_client(&server.uri(), Some("sk-test"))
        .chat("gpt-x", &history)
        .await
        .expect("reply");

    assert_eq!(reply, "first");
    let body = sent_body(&server).await;
    assert_eq!(sent_messages(&body), expected_messages(&history));
}

#[tokio::test]
async fn cloud_a_without_key_makes_no_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = cloud_a_client(&server.uri(), None)
        .chat("gpt-x", &[ChatMessage::user("hi")])
        .await
        .expect_err("unconfigured");

    assert_eq!(err.kind(), ErrorKind::Unconfigured);
    server.verify().await;
}

#[tokio::test]
async fn cloud_a_null_content_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        })))
        .mount(&server)
        .await;

    let err = cloud_a_client(&server.uri(), Some("sk-test"))
        .chat("gpt-x", &[ChatMessage::user("hi")])
        .await
        .expect_err("malformed");

    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn cloud_a_error_detail_does_not_contain_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"error":"bad key"}"#))
        .mount(&server)
        .await;

    let err = cloud_a_client(&server.uri(), Some("sk-super-secret"))
        .chat("gpt-x", &[ChatMessage::user("hi")])
        .await
        .expect_err("unauthorized");

    assert_eq!(err.upstream_status(), Some(401));
    assert!(!err.to_string().contains("sk-super-secret"));
    assert!(!err.detail().contains("sk-super-secret"));
}

// ============================================================================
// cloud-b
// ============================================================================

#[tokio::test]
async fn cloud_b_sends_key_header_and_lifts_system() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "ak-test"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({
            "model": "claude-x",
            "system": "be brief",
            "max_tokens": 1024,
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "Hello, "},
                {"type": "tool_use", "id": "t1", "name": "noop", "input": {}},
                {"type": "text", "text": "world"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let history = vec![
        ChatMessage::system("be brief"),
        ChatMessage::user("hi"),
        ChatMessage::assistant("hey"),
        ChatMessage::user("again"),
    ];
    let reply = cloud_b_client(&server.uri(), Some("ak-test"))
        .chat("claude-x", &history)
        .await
        .expect("reply");

    assert_eq!(reply, "Hello, world");
    let body = sent_body(&server).await;
    assert_eq!(sent_messages(&body), expected_messages(&history[1..]));
}

#[tokio::test]
async fn cloud_b_rate_limit_is_backend_error_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string(r#"{"error":"rate limited"}"#))
        .mount(&server)
        .await;

    let err = cloud_b_client(&server.uri(), Some("ak-test"))
        .chat("claude-x", &[ChatMessage::user("hi")])
        .await
        .expect_err("rate limited");

    assert_eq!(err.kind(), ErrorKind::BackendError);
    assert_eq!(err.upstream_status(), Some(429));
    assert!(err.detail().contains("rate limited"));
}

#[tokio::test]
async fn cloud_b_without_text_blocks_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
        .mount(&server)
        .await;

    let err = cloud_b_client(&server.uri(), Some("ak-test"))
        .chat("claude-x", &[ChatMessage::user("hi")])
        .await
        .expect_err("malformed");

    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn cloud_b_without_key_makes_no_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = cloud_b_client(&server.uri(), None)
        .chat("claude-x", &[ChatMessage::user("hi")])
        .await
        .expect_err("unconfigured");

    assert_eq!(err.kind(), ErrorKind::Unconfigured);
    server.verify().await;
}
