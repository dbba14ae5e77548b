//! Count characters tool definition.

use super::TextParams;
use crate::domains::tools::{Arguments, ToolDescriptor, ToolError};

/// Count characters tool - counts Unicode code points, not bytes.
pub struct CountTotalCharactersTool;

impl CountTotalCharactersTool {
    /// Tool name as registered.
    pub const NAME: &'static str = "count_total_characters";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Count the total number of characters in the given text";

    /// Execute the tool logic.
    pub fn execute(params: &TextParams) -> u64 {
        params.text.chars().count() as u64
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
