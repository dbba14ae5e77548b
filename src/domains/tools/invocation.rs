//! Invocation request, result, and response envelope types.
//!
//! [`InvocationResult`] is what the dispatcher produces; [`ToolCallResponse`]
//! is the JSON shape both transports render it into.

use serde::{Deserialize, Deserializer, Serialize};

use super::{Arguments, ToolError};

/// A single request to execute one tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// The name of the tool to execute.
    ///
    /// A missing or non-string name is kept as text so it resolves to an
    /// unknown tool rather than a malformed request.
    #[serde(default, deserialize_with = "tool_name_from_any")]
    pub tool_name: String,

    /// The arguments to pass to the tool.
    #[serde(default)]
    pub arguments: Arguments,
}

impl InvocationRequest {
    /// Create a new invocation request.
    pub fn new(tool_name: impl Into<String>, arguments: Arguments) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

fn tool_name_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(name)) => name,
        None | Some(serde_json::Value::Null) => String::new(),
        Some(other) => other.to_string(),
    })
}

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResult {
    /// The tool ran and produced a count.
    Success {
        tool_name: String,
        arguments: Arguments,
        result: u64,
    },

    /// The tool could not be resolved or rejected its arguments.
    Failure { error: ToolError },
}

impl InvocationResult {
    /// Whether the invocation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The count, if the invocation succeeded.
    pub fn result(&self) -> Option<u64> {
        match self {
            Self::Success { result, .. } => Some(*result),
            Self::Failure { .. } => None,
        }
    }

    /// The error, if the invocation failed.
    pub fn error(&self) -> Option<&ToolError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    /// Shape this result into its response envelope.
    pub fn into_response(self) -> ToolCallResponse {
        match self {
            Self::Success {
                tool_name,
                arguments,
                result,
            } => ToolCallResponse::Success {
                tool: tool_name,
                arguments,
                result,
                status: ResponseStatus::Success,
            },
            Self::Failure { error } => ToolCallResponse::error(&error),
        }
    }
}

/// The `status` field of every tool-call response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response envelope for a tool call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolCallResponse {
    /// `{"tool", "arguments", "result", "status": "success"}`
    Success {
        tool: String,
        arguments: Arguments,
        result: u64,
        status: ResponseStatus,
    },

    /// `{"error", "status": "error"}`, plus `available_tools` for unknown tools.
    Error {
        error: String,
        status: ResponseStatus,
        #[serde(skip_serializing_if = "Option::is_none")]
        available_tools: Option<Vec<String>>,
    },
}

impl ToolCallResponse {
    /// Error envelope for a tool error.
    pub fn error(error: &ToolError) -> Self {
        Self::Error {
            error: error.to_string(),
            status: ResponseStatus::Error,
            available_tools: error.available_tools().map(<[String]>::to_vec),
        }
    }

    /// Error envelope from a plain message, used for malformed requests.
    pub fn message(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
            status: ResponseStatus::Error,
            available_tools: None,
        }
    }

    /// Whether this envelope reports success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_arguments_default_to_empty() {
        let request: InvocationRequest =
            serde_json::from_value(json!({ "tool_name": "count_words" })).unwrap();
        assert!(request.arguments.is_empty());
    }

    #[test]
    fn test_request_without_tool_name_is_empty_name() {
        let request: InvocationRequest =
            serde_json::from_value(json!({ "arguments": { "text": "a" } })).unwrap();
        assert_eq!(request.tool_name, "");

        let request: InvocationRequest =
            serde_json::from_value(json!({ "tool_name": null })).unwrap();
        assert_eq!(request.tool_name, "");
    }

    #[test]
    fn test_request_non_string_tool_name_kept_as_text() {
        let request: InvocationRequest =
            serde_json::from_value(json!({ "tool_name": 42 })).unwrap();
        assert_eq!(request.tool_name, "42");
    }

    #[test]
    fn test_request_rejects_non_object_arguments() {
        let result = serde_json::from_value::<InvocationRequest>(
            json!({ "tool_name": "count_words", "arguments": ["a"] }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_success_envelope_shape() {
        let mut arguments = Arguments::new();
        arguments.insert("text".into(), json!("Programming"));
        let result = InvocationResult::Success {
            tool_name: "count_total_rs".into(),
            arguments,
            result: 2,
        };

        let body = serde_json::to_string(&result.into_response()).unwrap();
        assert_eq!(
            body,
            r#"{"tool":"count_total_rs","arguments":{"text":"Programming"},"result":2,"status":"success"}"#
        );
    }

    #[test]
    fn test_unknown_tool_envelope_lists_tools() {
        let result = InvocationResult::Failure {
            error: ToolError::unknown_tool("nope", ["count_words"]),
        };
        let body = serde_json::to_value(result.into_response()).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["available_tools"], json!(["count_words"]));
    }

    #[test]
    fn test_invocation_error_envelope_omits_tools() {
        let response = ToolCallResponse::error(&ToolError::invalid_argument_type("text", "string"));
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body, json!({ "error": "text must be a string", "status": "error" }));
        assert!(!response.is_success());
    }
}
