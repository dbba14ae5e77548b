//! Configuration management for the tool server.
//!
//! This module provides a centralized configuration structure populated from
//! defaults, a `.env` file, and `TOOLS_*` environment variables.

use super::error::Result;
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the tool server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported by the health endpoint.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Simple MCP-style Tool Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `TOOLS_`, for example `TOOLS_SERVER_NAME`,
    /// `TOOLS_LOG_LEVEL`, `TOOLS_TRANSPORT`. A `.env` file in the working
    /// directory is read first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("TOOLS_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("TOOLS_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env()?;

        Ok(config)
    }
}

// Env var tests anywhere in the crate take this lock.
#[cfg(test)]
pub(crate) static ENV_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
