//! Reqtrace Service
//!
//! Thin HTTP surface over the traceability core. Exposes a recompute
//! endpoint and a health check; persistence, authentication, and the
//! extraction service all live in the surrounding application and hand
//! plain JSON across this boundary.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServiceConfig;
use handlers::{create_router, AppState};
use reqtrace_graph::TraceGraphBuilder;
use reqtrace_verifier::{CitationVerifier, VerifierError};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Service error
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Verifier setup error
    #[error("Verifier error: {0}")]
    Verifier(#[from] VerifierError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the service HTTP server
///
/// Initializes tracing, builds the shared pipeline state, and serves until
/// shutdown.
pub async fn start_server(config: ServiceConfig) -> Result<(), ServiceError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting reqtrace service");
    info!("Bind address: {}", config.bind_addr());

    let state = AppState {
        builder: Arc::new(TraceGraphBuilder::new(config.graph.clone())),
        verifier: Arc::new(CitationVerifier::new(config.verifier.clone())?),
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Service listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServiceError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_test_config() {
        let config = ServiceConfig::default_test_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
