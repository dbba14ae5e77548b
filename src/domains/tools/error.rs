//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while resolving or invoking a tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool is not in the registry.
    #[error("Tool '{name}' not found. Available tools: {}", .available.join(", "))]
    UnknownTool {
        name: String,
        available: Vec<String>,
    },

    /// An argument does not have the type the tool expects.
    #[error("{argument} must be a {expected}")]
    InvalidArgumentType {
        argument: String,
        expected: String,
    },

    /// The argument set could not be bound to the tool's parameters.
    #[error("{0}")]
    InvocationError(String),

    /// Two descriptors share a name.
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool<I, S>(name: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownTool {
            name: name.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a new "invalid argument type" error.
    pub fn invalid_argument_type(argument: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidArgumentType {
            argument: argument.into(),
            expected: expected.into(),
        }
    }

    /// Create a new invocation error.
    pub fn invocation(msg: impl Into<String>) -> Self {
        Self::InvocationError(msg.into())
    }

    /// Tool names to report alongside the error, if any.
    pub fn available_tools(&self) -> Option<&[String]> {
        match self {
            Self::UnknownTool { available, .. } => Some(available.as_slice()),
            _ => None,
        }
    }
}
