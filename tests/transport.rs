use cligpt::api::{ChatClient, Completion};
use cligpt::error::CliGptError;
use cligpt::models::Message;
use mockito::Matcher;
use serde_json::json;

fn completion_body(content: &str, model: &str) -> String {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": model,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

fn history() -> Vec<Message> {
    vec![
        Message::system("You are a helpful assistant"),
        Message::user("Hello\n"),
    ]
}

#[tokio::test]
async fn it_posts_history_and_returns_reported_model() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "model": "gpt-4",
            "messages": [
                {"role": "system", "content": "You are a helpful assistant"},
                {"role": "user", "content": "Hello\n"}
            ],
            "temperature": 0.7
        })))
        .with_status(200)
        .with_body(completion_body("Hi there!", "gpt-4-0613"))
        .create_async()
        .await;

    let endpoint = format!("{}/v1/chat/completions", server.url());
    let client = ChatClient::new("sk-test", &endpoint, false).unwrap();
    let reply = client.complete(&history(), "gpt-4").await.unwrap();

    mock.assert_async().await;
    assert_eq!(reply.message, Message::assistant("Hi there!"));
    assert_eq!(reply.model, "gpt-4-0613");
}

#[tokio::test]
async fn it_fails_with_transport_error_on_500() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .expect(1)
        .create_async()
        .await;

    let endpoint = format!("{}/v1/chat/completions", server.url());
    let client = ChatClient::new("sk-test", &endpoint, false).unwrap();
    let err = client.complete(&history(), "gpt-4").await.unwrap_err();

    // Exactly one attempt, no retry.
    mock.assert_async().await;
    match err {
        CliGptError::TransportError { status, message } => {
            assert_eq!(status, Some(500));
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn it_fails_with_protocol_error_on_bad_shape() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(json!({"object": "chat.completion"}).to_string())
        .create_async()
        .await;

    let endpoint = format!("{}/v1/chat/completions", server.url());
    let client = ChatClient::new("sk-test", &endpoint, false).unwrap();
    let err = client.complete(&history(), "gpt-4").await.unwrap_err();
    assert!(matches!(err, CliGptError::ProtocolError(_)));
}

#[tokio::test]
async fn it_fails_with_transport_error_when_unreachable() {
    // Port 9 (discard) on localhost is not expected to accept HTTP.
    let client = ChatClient::new("sk-test", "http://127.0.0.1:9/v1/chat/completions", false).unwrap();
    let err = client.complete(&history(), "gpt-4").await.unwrap_err();
    assert!(matches!(err, CliGptError::TransportError { status: None, .. }));
}

#[tokio::test]
async fn it_rejects_empty_history_before_sending() {
    let client = ChatClient::new("sk-test", "http://127.0.0.1:9/v1/chat/completions", false).unwrap();
    let err = client.complete(&[], "gpt-4").await.unwrap_err();
    assert!(matches!(err, CliGptError::ConfigError(_)));
}

#[test]
fn it_rejects_an_empty_api_key() {
    assert!(matches!(
        ChatClient::new("", "http://localhost/v1/chat/completions", false),
        Err(CliGptError::ConfigError(_))
    ));
}

#[tokio::test]
async fn it_completes_with_verbose_diagnostics_enabled() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(completion_body("Hi", "gpt-4"))
        .expect(1)
        .create_async()
        .await;

    let endpoint = format!("{}/v1/chat/completions", server.url());
    let client = ChatClient::new("sk-test", &endpoint, true).unwrap();
    let reply = client.complete(&history(), "gpt-4").await.unwrap();

    mock.assert_async().await;
    assert_eq!(reply.message.content, "Hi");
}
