//! Tool server - the application object shared by every transport.
//!
//! The server owns the configuration and the tool registry, both behind
//! `Arc`, so it can be cloned freely into request handlers. It is built once
//! in `main` and handed to the transport that runs.

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::{
    Dispatcher, InvocationRequest, InvocationResult, ToolDescriptor, ToolError, ToolRegistry,
};

/// Body of the health endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub server: String,
    pub available_tools: Vec<String>,
}

/// Body of the tool listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolListing {
    pub tools: serde_json::Map<String, serde_json::Value>,
}

/// The tool server.
#[derive(Debug, Clone)]
pub struct ToolServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher over the shared, immutable registry.
    dispatcher: Dispatcher,
}

impl ToolServer {
    /// Create a new server with the given configuration and registry.
    pub fn new(config: Config, registry: ToolRegistry) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: Dispatcher::new(Arc::new(registry)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &ToolRegistry {
        self.dispatcher.registry()
    }

    /// Look up a single tool.
    pub fn resolve(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.registry().resolve(name)
    }

    /// Health status with the names of all tools.
    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy",
            server: self.name().to_string(),
            available_tools: self
                .registry()
                .tool_names()
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    /// Every tool with its description and parameters, in registry order.
    pub fn list_tools(&self) -> ToolListing {
        let tools = self
            .registry()
            .list()
            .iter()
            .map(|tool| {
                (
                    tool.name.to_string(),
                    serde_json::json!({
                        "description": tool.description,
                        "parameters": tool.parameters_json(),
                    }),
                )
            })
            .collect();

        ToolListing { tools }
    }

    /// Run one invocation.
    #[instrument(skip_all, fields(tool = %request.tool_name))]
    pub fn call_tool(&self, request: InvocationRequest) -> InvocationResult {
        info!("Tool call received");
        self.dispatcher
            .dispatch(&request.tool_name, request.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::Arguments;
    use serde_json::json;

    fn server() -> ToolServer {
        ToolServer::new(Config::default(), ToolRegistry::builtin())
    }

    #[test]
    fn test_health_report() {
        let report = server().health();
        assert_eq!(report.status, "healthy");
        assert_eq!(report.server, "Simple MCP-style Tool Server");
        assert_eq!(
            report.available_tools,
            vec!["count_total_rs", "count_total_characters", "count_words"]
        );
    }

    #[test]
    fn test_list_tools_shape() {
        let listing = serde_json::to_value(server().list_tools()).unwrap();
        assert_eq!(
            listing["tools"]["count_words"],
            json!({
                "description": "Count the total number of words in the given text",
                "parameters": { "text": "string - The text to analyze" }
            })
        );
    }

    #[test]
    fn test_list_tools_is_stable() {
        let server = server();
        let first = serde_json::to_string(&server.list_tools()).unwrap();
        let second = serde_json::to_string(&server.list_tools()).unwrap();
        assert_eq!(first, second);

        let names: Vec<_> = server.list_tools().tools.keys().cloned().collect();
        assert_eq!(names, server.health().available_tools);
    }

    #[test]
    fn test_call_tool() {
        let mut arguments = Arguments::new();
        arguments.insert("text".into(), json!("Hello world"));
        let result = server().call_tool(InvocationRequest::new("count_words", arguments));
        assert_eq!(result.result(), Some(2));
    }

    #[test]
    fn test_clones_share_registry() {
        let server = server();
        let clone = server.clone();
        assert!(std::ptr::eq(server.registry(), clone.registry()));
    }
}
