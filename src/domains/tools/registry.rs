//! Tool Registry - the fixed set of tools and their metadata.
//!
//! This module provides:
//! - [`ToolDescriptor`], the metadata and entry point of one tool
//! - [`ToolRegistry`], an ordered, immutable collection of descriptors
//!
//! The registry is built once at startup and shared behind an `Arc`. There is
//! no registration API after construction.

use std::collections::HashSet;
use std::fmt;

use super::ToolError;
use super::definitions::{CountTotalCharactersTool, CountTotalRsTool, CountWordsTool};

/// Arguments passed to a tool: a JSON object in the order it was received.
pub type Arguments = serde_json::Map<String, serde_json::Value>;

/// Signature shared by every tool entry point.
pub type ToolFn = fn(&Arguments) -> Result<u64, ToolError>;

// ============================================================================
// Tool Descriptor
// ============================================================================

/// One declared parameter of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Parameter name as it appears in the argument mapping.
    pub name: &'static str,

    /// Human-readable type and description.
    pub description: &'static str,
}

/// Metadata and entry point for a single tool.
#[derive(Clone, Copy)]
pub struct ToolDescriptor {
    /// Unique tool name.
    pub name: &'static str,

    /// Description shown to clients.
    pub description: &'static str,

    /// Declared parameters, in order.
    pub parameters: &'static [ParameterSpec],

    /// Function invoked with the raw argument mapping.
    pub invoke: ToolFn,
}

impl ToolDescriptor {
    /// Run the tool with the given arguments.
    pub fn call(&self, arguments: &Arguments) -> Result<u64, ToolError> {
        (self.invoke)(arguments)
    }

    /// Declared parameters as a JSON object of name to description.
    pub fn parameters_json(&self) -> serde_json::Map<String, serde_json::Value> {
        self.parameters
            .iter()
            .map(|p| (p.name.to_string(), p.description.into()))
            .collect()
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the immutable, ordered set of available tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// The built-in text-analysis tools, in listing order.
    pub fn builtin() -> Self {
        Self {
            tools: builtin_descriptors(),
        }
    }

    /// Build a registry from explicit descriptors, rejecting duplicate names.
    pub fn from_descriptors(tools: Vec<ToolDescriptor>) -> Result<Self, ToolError> {
        let mut seen = HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.name) {
                return Err(ToolError::DuplicateTool(tool.name.to_string()));
            }
        }
        Ok(Self { tools })
    }

    /// Look up a tool by name.
    pub fn resolve(&self, name: &str) -> Result<&ToolDescriptor, ToolError> {
        self.tools
            .iter()
            .find(|tool| tool.name == name)
            .ok_or_else(|| ToolError::unknown_tool(name, self.tool_names()))
    }

    /// All tools, in registration order.
    pub fn list(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// All tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_descriptors() -> Vec<ToolDescriptor> {
    vec![
        CountTotalRsTool::descriptor(),
        CountTotalCharactersTool::descriptor(),
        CountWordsTool::descriptor(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::builtin();
        assert_eq!(
            registry.tool_names(),
            vec!["count_total_rs", "count_total_characters", "count_words"]
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_builtin_names_are_unique() {
        assert!(ToolRegistry::from_descriptors(builtin_descriptors()).is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let tools = vec![CountWordsTool::descriptor(), CountWordsTool::descriptor()];
        let err = ToolRegistry::from_descriptors(tools).unwrap_err();
        assert_eq!(err, ToolError::DuplicateTool("count_words".into()));
    }

    #[test]
    fn test_resolve_known_tool() {
        let registry = ToolRegistry::builtin();
        let tool = registry.resolve("count_words").unwrap();
        assert_eq!(tool.description, CountWordsTool::DESCRIPTION);
    }

    #[test]
    fn test_resolve_unknown_tool() {
        let registry = ToolRegistry::builtin();
        let err = registry.resolve("unknown").unwrap_err();
        let available = err.available_tools().unwrap();
        assert_eq!(available.len(), 3);
        assert!(available.contains(&"count_total_rs".to_string()));
    }

    #[test]
    fn test_list_is_stable() {
        let registry = ToolRegistry::builtin();
        let first: Vec<_> = registry.list().iter().map(|t| t.name).collect();
        let second: Vec<_> = registry.list().iter().map(|t| t.name).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parameters_json() {
        let registry = ToolRegistry::builtin();
        let params = registry.resolve("count_total_rs").unwrap().parameters_json();
        assert_eq!(
            params.get("text").and_then(|v| v.as_str()),
            Some("string - The text to analyze")
        );
    }
}
