//! Error types and handling for the tool server.
//!
//! This module defines a unified error type covering the tools domain, the
//! transports, and configuration loading.

use thiserror::Error;

/// A specialized Result type for tool server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the tool server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;

    #[test]
    fn test_tool_error_converts() {
        let err: Error = ToolError::DuplicateTool("count_words".into()).into();
        assert_eq!(err.to_string(), "Tool error: Duplicate tool name: count_words");
    }

    #[test]
    fn test_transport_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let err: Error = crate::core::transport::TransportError::bind("127.0.0.1:5000", io).into();
        assert!(err.to_string().contains("Failed to bind to 127.0.0.1:5000"));
    }
}
