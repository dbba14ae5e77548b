//! Dispatcher - resolves a tool by name and runs it.
//!
//! Every failure, from an unknown name to a badly typed argument, is turned
//! into [`InvocationResult::Failure`] here and never propagates further.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::{Arguments, InvocationResult, ToolRegistry};

/// Dispatches invocations against a shared registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this dispatcher resolves against.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Resolve `tool_name`, invoke it with `arguments`, and wrap the outcome.
    #[instrument(skip(self, arguments), fields(tool = %tool_name))]
    pub fn dispatch(&self, tool_name: &str, arguments: Arguments) -> InvocationResult {
        let tool = match self.registry.resolve(tool_name) {
            Ok(tool) => tool,
            Err(error) => {
                warn!("Unknown tool requested: {}", tool_name);
                return InvocationResult::Failure { error };
            }
        };

        info!("Dispatching tool call: {}", tool.name);

        match tool.call(&arguments) {
            Ok(result) => InvocationResult::Success {
                tool_name: tool.name.to_string(),
                arguments,
                result,
            },
            Err(error) => {
                warn!("Tool {} failed: {}", tool.name, error);
                InvocationResult::Failure { error }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolError;
    use serde_json::json;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Arc::new(ToolRegistry::builtin()))
    }

    fn args(value: serde_json::Value) -> Arguments {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_dispatch_success() {
        let result = dispatcher().dispatch("count_total_rs", args(json!({ "text": "Programming" })));
        assert_eq!(
            result,
            InvocationResult::Success {
                tool_name: "count_total_rs".into(),
                arguments: args(json!({ "text": "Programming" })),
                result: 2,
            }
        );
    }

    #[test]
    fn test_dispatch_each_tool() {
        let d = dispatcher();
        let text = args(json!({ "text": "Strawberry fields" }));
        assert_eq!(d.dispatch("count_total_rs", text.clone()).result(), Some(3));
        assert_eq!(d.dispatch("count_total_characters", text.clone()).result(), Some(17));
        assert_eq!(d.dispatch("count_words", text).result(), Some(2));
    }

    #[test]
    fn test_dispatch_unknown_tool_lists_all_names() {
        let result = dispatcher().dispatch("nonexistent", Arguments::new());
        let error = result.error().unwrap();
        let message = error.to_string();
        assert!(matches!(error, ToolError::UnknownTool { .. }));
        for name in ["count_total_rs", "count_total_characters", "count_words"] {
            assert!(message.contains(name));
        }
    }

    #[test]
    fn test_dispatch_wrong_type_is_failure() {
        let result = dispatcher().dispatch("count_words", args(json!({ "text": 123 })));
        assert!(!result.is_success());
        assert!(matches!(
            result.error(),
            Some(ToolError::InvalidArgumentType { .. })
        ));
    }

    #[test]
    fn test_dispatch_extra_argument_is_invocation_error() {
        let result = dispatcher().dispatch(
            "count_words",
            args(json!({ "text": "a b", "extra": true })),
        );
        assert!(matches!(result.error(), Some(ToolError::InvocationError(_))));
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let d = dispatcher();
        let first = d.dispatch("count_words", args(json!({ "text": " a  b " })));
        let second = d.dispatch("count_words", args(json!({ "text": " a  b " })));
        assert_eq!(first, second);
        assert_eq!(first.result(), Some(2));
    }
}
