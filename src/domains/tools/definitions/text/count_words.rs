//! Count words tool definition.
//!
//! A word is a maximal run of non-whitespace characters.

use super::TextParams;
use crate::domains::tools::{Arguments, ToolDescriptor, ToolError};

/// Count words tool - counts whitespace-delimited tokens.
pub struct CountWordsTool;

impl CountWordsTool {
    /// Tool name as registered.
    pub const NAME: &'static str = "count_words";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Count the total number of words in the given text";

    /// Execute the tool logic.
    pub fn execute(params: &TextParams) -> u64 {
        params.text.split_whitespace().count() as u64
    }

    /// Bind the arguments and run the tool.
    pub fn invoke(arguments: &Arguments) -> Result<u64, ToolError> {
        let params = TextParams::bind(Self::NAME, arguments)?;
        Ok(Self::execute(&params))
    }

    /// Create the registry descriptor for this tool.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            parameters: TextParams::SCHEMA,
            invoke: Self::invoke,
        }
    }
}
