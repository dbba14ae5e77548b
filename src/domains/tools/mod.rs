//! Tools domain module.
//!
//! This module handles all tool-related functionality. Tools are pure
//! functions, invoked by name, that analyze a piece of text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Immutable tool registry and descriptors
//! - `dispatcher.rs` - Name resolution, invocation, and failure recovery
//! - `invocation.rs` - Request, result, and response envelope types
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with `NAME`, `DESCRIPTION`,
//!    `execute()`, `invoke()` and `descriptor()`
//! 2. Export it in the family's `mod.rs`
//! 3. Add its descriptor to `builtin_descriptors()` in `registry.rs`

pub mod definitions;
mod dispatcher;
mod error;
mod invocation;
mod registry;

pub use dispatcher::Dispatcher;
pub use error::ToolError;
pub use invocation::{InvocationRequest, InvocationResult, ResponseStatus, ToolCallResponse};
pub use registry::{Arguments, ParameterSpec, ToolDescriptor, ToolFn, ToolRegistry};
