//! Configuration file parsing for the service
//!
//! Loads settings from TOML: bind address and port, plus the graph and
//! verifier sections, both optional and defaulted.

use reqtrace_graph::GraphConfig;
use reqtrace_verifier::VerifierConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Service configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A section failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Service configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Bind address (e.g. "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g. 8080)
    pub bind_port: u16,

    /// Graph pipeline settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Citation verifier settings
    #[serde(default)]
    pub verifier: VerifierConfig,
}

impl ServiceConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServiceConfig = toml::from_str(&contents)?;

        config.graph.validate().map_err(ConfigError::Invalid)?;
        config.verifier.validate().map_err(ConfigError::Invalid)?;

        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServiceConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            graph: GraphConfig::default(),
            verifier: VerifierConfig::default(),
        }
    }

    /// The full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
