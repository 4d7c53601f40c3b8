//! Integration tests for SupportChat.
//!
//! These drive the HTTP app end to end with stub generation services.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use supportchat::{
    http_app, AppState, ChatResponse, DomainError, GenerationService, HandleChatUseCase,
    ImageAttachment, MockGeneration, SupportCategory, GENERATION_FALLBACK_REPLY,
    IMAGE_FALLBACK_REPLY,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Text(String),
    Image(String, Vec<u8>, String),
}

/// Replies with a fixed text and records every call.
struct StubGeneration {
    reply: String,
    calls: Mutex<Vec<Call>>,
}

impl StubGeneration {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationService for StubGeneration {
    async fn generate_text(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(Call::Text(prompt.to_string()));
        Ok(self.reply.clone())
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        image: &ImageAttachment,
    ) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(Call::Image(
            prompt.to_string(),
            image.bytes().to_vec(),
            image.mime_type().to_string(),
        ));
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Fails every call with the configured error.
struct BrokenGeneration {
    make_error: fn() -> DomainError,
}

#[async_trait]
impl GenerationService for BrokenGeneration {
    async fn generate_text(&self, _prompt: &str) -> Result<String, DomainError> {
        Err((self.make_error)())
    }

    async fn generate_with_image(
        &self,
        _prompt: &str,
        _image: &ImageAttachment,
    ) -> Result<String, DomainError> {
        Err((self.make_error)())
    }

    fn name(&self) -> &str {
        "broken"
    }
}

fn app_with(service: Arc<dyn GenerationService>, dir: &Path) -> axum::Router {
    let state = AppState::new(HandleChatUseCase::new(service), dir.join("templates"));
    http_app(state, dir.join("static"))
}

async fn post_chat(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_greeting_uses_text_path_and_default_context() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stub = StubGeneration::new("Hello! How can I help?");
    let app = app_with(stub.clone(), dir.path());

    let (status, body) = post_chat(app, json!({"message": "hi", "option": null})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Hello! How can I help?"}));

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        Call::Text(prompt) => {
            assert!(prompt.contains("Customer: hi"));
            assert!(prompt.contains(SupportCategory::General.preamble()));
        }
        other => panic!("expected text call, got {other:?}"),
    }
}

#[tokio::test]
async fn test_image_request_uses_image_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stub = StubGeneration::new("1. Issue Identification: cracked display");
    let app = app_with(stub.clone(), dir.path());

    let (status, body) = post_chat(
        app,
        json!({
            "message": "it's broken",
            "option": "technical",
            "image": "data:image/png;base64,QUJD",
            "image_description": "cracked screen"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "1. Issue Identification: cracked display");

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    match &calls[0] {
        Call::Image(prompt, bytes, mime) => {
            assert_eq!(bytes, b"ABC");
            assert_eq!(mime, "image/png");
            assert!(prompt.contains("Customer's Description: cracked screen"));
            assert!(prompt.contains(SupportCategory::Technical.preamble()));
        }
        other => panic!("expected image call, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_base64_returns_image_apology() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stub = StubGeneration::new("unused");
    let app = app_with(stub.clone(), dir.path());

    let (status, body) = post_chat(
        app,
        json!({"message": "see attached", "image": "data:image/png;base64,!!not base64!!"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], IMAGE_FALLBACK_REPLY);
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_generation_failure_returns_generic_apology() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service = Arc::new(BrokenGeneration {
        make_error: || DomainError::generation("429 quota exceeded"),
    });

    let (status, body) = post_chat(
        app_with(service.clone(), dir.path()),
        json!({"message": "my invoice is wrong", "option": "billing"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], GENERATION_FALLBACK_REPLY);

    let (status, body) = post_chat(
        app_with(service, dir.path()),
        json!({"message": "look", "image": "data:image/jpeg;base64,QUJD"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], GENERATION_FALLBACK_REPLY);
}

#[tokio::test]
async fn test_unexpected_failure_returns_500_with_detail() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service = Arc::new(BrokenGeneration {
        make_error: || DomainError::internal("could not build request"),
    });

    let (status, body) = post_chat(app_with(service, dir.path()), json!({"message": "hi"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Internal error: could not build request");
}

#[tokio::test]
async fn test_any_text_message_gets_non_empty_reply() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service: Arc<dyn GenerationService> = Arc::new(MockGeneration::new());

    for message in ["", "hi", "where is order #1234?", "ünïcødé ✓", "   "] {
        let (status, body) =
            post_chat(app_with(service.clone(), dir.path()), json!({"message": message})).await;
        assert_eq!(status, StatusCode::OK);
        let reply: ChatResponse = serde_json::from_value(body).unwrap();
        assert!(!reply.response.is_empty(), "empty reply for {message:?}");
    }
}

#[tokio::test]
async fn test_same_request_twice_is_idempotent() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service: Arc<dyn GenerationService> = Arc::new(MockGeneration::new());
    let request = json!({"message": "I want a refund", "option": "refund"});

    let (_, first) = post_chat(app_with(service.clone(), dir.path()), request.clone()).await;
    let (_, second) = post_chat(app_with(service, dir.path()), request).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_message_is_rejected_by_extractor() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stub = StubGeneration::new("unused");
    let app = app_with(stub.clone(), dir.path());

    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"option": "order"}"#))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert!(resp.status().is_client_error());
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_home_serves_template() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(dir.path().join("templates")).unwrap();
    std::fs::write(
        dir.path().join("templates/home.html"),
        "<html><body>Support chat</body></html>",
    )
    .unwrap();

    let (status, body) = get(app_with(StubGeneration::new("x"), dir.path()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Support chat"));
}

#[tokio::test]
async fn test_home_without_template_is_404() {
    let dir = tempfile::tempdir().expect("tempdir");

    let (status, body) = get(app_with(StubGeneration::new("x"), dir.path()), "/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("home.html"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(dir.path().join("static")).unwrap();
    std::fs::write(dir.path().join("static/chat.js"), "console.log('chat');").unwrap();

    let (status, body) = get(app_with(StubGeneration::new("x"), dir.path()), "/static/chat.js").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('chat');");
}

#[tokio::test]
async fn test_health_reports_version() {
    let dir = tempfile::tempdir().expect("tempdir");

    let (status, body) = get(app_with(StubGeneration::new("x"), dir.path()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
