//! Count 'r' tool definition.
//!
//! Counts occurrences of the letter 'r' in a text, ignoring case.

use tracing::debug;

use super::TextParams;
use crate::domains::tools::{Arguments, ToolDescriptor, ToolError};

/// Count 'r' tool - counts 'r' and 'R' characters in the given text.
pub struct CountTotalRsTool;

impl CountTotalRsTool {
    /// Tool name as registered.
    pub const NAME: &'static str = "count_total_rs";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Count the total number of 'r' characters in the given text";

    /// Execute the tool logic.
    pub fn execute(params: &TextParams) -> u64 {
        let count = params.text.to_lowercase().matches('r').count() as u64;
        debug!("Counted {} 'r' characters", count);
        count
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
