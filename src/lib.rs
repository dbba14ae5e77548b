//! Text Tools Server Library
//!
//! A small tool server exposing a fixed registry of text-analysis functions
//! (character count, word count, 'r' count) by name.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the [`ToolServer`], and the
//!   HTTP and interactive CLI transports
//! - **domains**: business logic
//!   - **tools**: tool definitions, the registry, and the dispatcher
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use text_tools_server::core::{Config, ToolServer};
//! use text_tools_server::domains::tools::{InvocationRequest, ToolRegistry};
//!
//! let server = ToolServer::new(Config::default(), ToolRegistry::builtin());
//!
//! let arguments = json!({ "text": "Strawberry" }).as_object().cloned().unwrap();
//! let result = server.call_tool(InvocationRequest::new("count_total_rs", arguments));
//! assert_eq!(result.result(), Some(3));
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, ToolServer};
