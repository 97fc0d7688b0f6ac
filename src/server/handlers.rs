// HTTP request handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::ChatServer;
use crate::transcript::{InteractionRecord, TranscriptLogger};

/// Create the main application router
pub fn create_router(server: Arc<ChatServer>) -> Router {
    Router::new()
        .route("/chat", post(handle_chat))
        .route("/", get(health_check))
        .with_state(server)
}

/// Request body for POST /chat
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message; must be non-empty after trimming
    #[serde(default)]
    pub message: String,
}

/// Response body for POST /chat
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Reply text
    pub reply: String,
    /// True when the message triggered the crisis protocol
    #[serde(default)]
    pub is_crisis: bool,
}

/// Handle POST /chat - Main chat endpoint
async fn handle_chat(
    State(server): State<Arc<ChatServer>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::EmptyMessage);
    }

    let reply = server.pipeline().process(message);

    tracing::info!(
        message_hash = %TranscriptLogger::hash_message(message),
        is_crisis = reply.is_crisis,
        "Processed chat message"
    );

    // Storage is best-effort: a failed append must not cost the user the
    // reply that was already computed.
    let record = InteractionRecord::new(message.to_string(), reply.text.clone(), reply.is_crisis);
    if let Err(err) = server.transcript().log(&record) {
        tracing::warn!(error = %err, "Failed to append transcript record");
    }

    Ok(Json(ChatResponse {
        reply: reply.text,
        is_crisis: reply.is_crisis,
    }))
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Handle GET / - Health check endpoint
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "solace chat service is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Errors surfaced by the HTTP layer
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("message must not be empty")]
    EmptyMessage,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::EmptyMessage => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_request_error"),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "api_error")
            }
        };

        let body = serde_json::json!({
            "error": {
                "message": self.to_string(),
                "type": error_type
            }
        });

        (status, Json(body)).into_response()
    }
}
