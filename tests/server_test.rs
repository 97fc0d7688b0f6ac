// Integration tests for the HTTP server

use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

use solace::pipeline::Pipeline;
use solace::response;
use solace::server::{create_router, ChatResponse, ChatServer, HealthStatus, ServerConfig};
use solace::transcript::{InteractionRecord, TranscriptLogger};

fn test_router(transcript_dir: &Path) -> axum::Router {
    let transcript = TranscriptLogger::new(transcript_dir).expect("Failed to create logger");
    let server = ChatServer::new(Pipeline::default(), transcript, ServerConfig::default());
    create_router(Arc::new(server))
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

async fn response_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Failed to parse body")
}

#[tokio::test]
async fn test_chat_supportive_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(dir.path());

    let response = app
        .oneshot(chat_request(r#"{"message": "I feel anxious about my exam"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ChatResponse = response_json(response).await;
    assert!(!body.is_crisis);
    assert!(body.reply.starts_with("Thank you for sharing this with me."));
    assert!(body.reply.contains("feeling anxious"));
}

#[tokio::test]
async fn test_chat_crisis_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(dir.path());

    let response = app
        .oneshot(chat_request(r#"{"message": "I want to kill myself"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ChatResponse = response_json(response).await;
    assert!(body.is_crisis);
    assert_eq!(body.reply, response::crisis_reply());
}

#[tokio::test]
async fn test_chat_persists_interaction() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(dir.path());

    let response = app
        .oneshot(chat_request(r#"{"message": "Feeling Sad Today"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let contents = std::fs::read_to_string(dir.path().join("transcript.jsonl")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);

    let record: InteractionRecord = serde_json::from_str(lines[0]).unwrap();
    // Original casing preserved in storage
    assert_eq!(record.message, "Feeling Sad Today");
    assert!(!record.is_crisis);
    assert!(record.reply.contains("feeling down"));
}

#[tokio::test]
async fn test_empty_message_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(dir.path());

    let response = app
        .oneshot(chat_request(r#"{"message": "   "}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Rejected requests leave no transcript row
    assert!(!dir.path().join("transcript.jsonl").exists());
}

#[tokio::test]
async fn test_missing_message_field_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(dir.path());

    let response = app.oneshot(chat_request(r#"{}"#)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_check() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_router(dir.path());

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: HealthStatus = response_json(response).await;
    assert!(body.status.contains("running"));
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}
