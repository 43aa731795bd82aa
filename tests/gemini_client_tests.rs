//! GeminiClient against a stubbed generateContent endpoint.

use std::time::Duration;

use jokesmith::{ChatMessage, DomainError, GeminiClient, GeminiConfig, GenerationRequest, TextGenerator};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(GeminiConfig::new("test-key").with_base_url(server.uri()))
        .expect("valid config")
}

async fn stub(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(query_param("key", "test-key"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn sent_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    serde_json::from_slice(&requests[0].body).expect("request body is JSON")
}

#[tokio::test]
async fn generate_returns_first_candidate_text() {
    let server = MockServer::start().await;
    stub(
        &server,
        ResponseTemplate::new(200).set_body_string(
            r#"{"candidates":[{"content":{"parts":[{"text":"Cats rule."}]}}]}"#,
        ),
    )
    .await;

    let client = client_for(&server);
    let request = GenerationRequest::new("tell me about cats").with_temperature(0.9);
    let text = client.generate(&request).await.expect("generation succeeds");

    assert_eq!(text, "Cats rule.");

    let body = sent_body(&server).await;
    assert_eq!(
        body,
        json!({
            "contents": [{"parts": [{"text": "tell me about cats"}]}],
            "generationConfig": {"temperature": 0.9, "topK": 40, "topP": 0.95}
        })
    );
}

#[tokio::test]
async fn generate_sends_max_output_tokens_when_set() {
    let server = MockServer::start().await;
    stub(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"candidates":[{"content":{"parts":[{"text":"ok"}]}}]})),
    )
    .await;

    let client = client_for(&server);
    let request = GenerationRequest::new("short").with_max_output_tokens(64);
    client.generate(&request).await.expect("generation succeeds");

    let body = sent_body(&server).await;
    assert_eq!(body["generationConfig"]["maxOutputTokens"], json!(64));
}

#[tokio::test]
async fn context_turns_keep_roles_and_order() {
    let server = MockServer::start().await;
    stub(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"candidates":[{"content":{"parts":[{"text":"Your name is Ana."}]}}]})),
    )
    .await;

    let client = client_for(&server);
    let messages = vec![
        ChatMessage::user("Hi, my name is Ana"),
        ChatMessage::model("Nice to meet you, Ana!"),
        ChatMessage::user("What is my name?"),
    ];
    let text = client
        .generate_with_context(&messages, 0.4)
        .await
        .expect("generation succeeds");
    assert_eq!(text, "Your name is Ana.");

    let body = sent_body(&server).await;
    assert_eq!(
        body["contents"],
        json!([
            {"role": "user", "parts": [{"text": "Hi, my name is Ana"}]},
            {"role": "model", "parts": [{"text": "Nice to meet you, Ana!"}]},
            {"role": "user", "parts": [{"text": "What is my name?"}]}
        ])
    );
    assert!(body["generationConfig"].get("maxOutputTokens").is_none());
}

#[tokio::test]
async fn status_429_is_rate_limited() {
    let server = MockServer::start().await;
    stub(&server, ResponseTemplate::new(429)).await;

    let err = client_for(&server)
        .generate(&GenerationRequest::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::RateLimited), "got {err:?}");
}

#[tokio::test]
async fn status_401_is_unauthorized() {
    let server = MockServer::start().await;
    stub(&server, ResponseTemplate::new(401)).await;

    let err = client_for(&server)
        .generate(&GenerationRequest::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized), "got {err:?}");
}

#[tokio::test]
async fn other_status_is_upstream_with_code() {
    let server = MockServer::start().await;
    stub(
        &server,
        ResponseTemplate::new(503).set_body_string("service unavailable"),
    )
    .await;

    let err = client_for(&server)
        .generate(&GenerationRequest::new("x"))
        .await
        .unwrap_err();
    match err {
        DomainError::Upstream { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "service unavailable");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn context_call_keeps_granular_errors() {
    let server = MockServer::start().await;
    stub(&server, ResponseTemplate::new(429)).await;

    let err = client_for(&server)
        .generate_with_context(&[ChatMessage::user("hello")], 0.9)
        .await
        .unwrap_err();
    assert!(err.is_rate_limited());
}

#[tokio::test]
async fn missing_text_is_malformed_response() {
    let server = MockServer::start().await;
    stub(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"candidates": []})),
    )
    .await;

    let err = client_for(&server)
        .generate(&GenerationRequest::new("x"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::MalformedResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let server = MockServer::start().await;
    stub(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"candidates":[{"content":{"parts":[{"text":"late"}]}}]}))
            .set_delay(Duration::from_secs(5)),
    )
    .await;

    let client = GeminiClient::new(
        GeminiConfig::new("test-key")
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(200)),
    )
    .expect("valid config");

    let err = client.generate(&GenerationRequest::new("x")).await.unwrap_err();
    assert!(matches!(err, DomainError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn unreachable_host_is_connection_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let client = GeminiClient::new(
        GeminiConfig::new("test-key").with_base_url(format!("http://127.0.0.1:{port}")),
    )
    .expect("valid config");

    let err = client.generate(&GenerationRequest::new("x")).await.unwrap_err();
    match err {
        DomainError::Connection(detail) => assert!(!detail.contains("test-key")),
        other => panic!("expected connection error, got {other:?}"),
    }
}
