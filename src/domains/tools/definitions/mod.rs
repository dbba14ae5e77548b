//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file, grouped by family.

pub mod text;

pub use text::{CountTotalCharactersTool, CountTotalRsTool, CountWordsTool, TextParams};
