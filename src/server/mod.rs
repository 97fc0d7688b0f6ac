// Server module
// HTTP transport for the chat pipeline

mod handlers;

pub use handlers::{create_router, health_check, ChatRequest, ChatResponse, HealthStatus};

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::pipeline::Pipeline;
use crate::transcript::TranscriptLogger;

/// Configuration for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
        }
    }
}

/// Shared state behind the chat endpoints
pub struct ChatServer {
    /// Classification and response pipeline (immutable after startup)
    pipeline: Pipeline,
    /// Append-only interaction store
    transcript: TranscriptLogger,
    /// Server configuration
    config: ServerConfig,
}

impl ChatServer {
    /// Create a new chat server
    pub fn new(pipeline: Pipeline, transcript: TranscriptLogger, config: ServerConfig) -> Self {
        Self {
            pipeline,
            transcript,
            config,
        }
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self.config.bind_address.parse()?;

        // Create application state
        let app_state = Arc::new(self);

        // Build router; CORS stays permissive so a local frontend can call us
        let app = create_router(app_state)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        tracing::info!("Starting solace chat server on {}", addr);

        // Start server
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Get reference to the pipeline
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Get reference to the transcript logger
    pub fn transcript(&self) -> &TranscriptLogger {
        &self.transcript
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
