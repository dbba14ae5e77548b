//! Text-analysis tools.
//!
//! Every tool in this family takes a single `text` argument and returns a
//! count. Argument binding is shared through [`TextParams`].

pub mod count_characters;
pub mod count_rs;
pub mod count_words;

pub use count_characters::CountTotalCharactersTool;
pub use count_rs::CountTotalRsTool;
pub use count_words::CountWordsTool;

use crate::domains::tools::{Arguments, ParameterSpec, ToolError};

/// Bound parameters for a text tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextParams {
    /// The text to analyze.
    pub text: String,
}

impl TextParams {
    /// Name of the single parameter.
    pub const TEXT: &'static str = "text";

    /// Declared parameter schema shared by all text tools.
    pub const SCHEMA: &'static [ParameterSpec] = &[ParameterSpec {
        name: Self::TEXT,
        description: "string - The text to analyze",
    }];

    /// Bind an argument mapping to `TextParams` on behalf of `tool`.
    ///
    /// Unknown keys are rejected before the missing-argument check, and the
    /// type of `text` is checked last.
    pub fn bind(tool: &str, arguments: &Arguments) -> Result<Self, ToolError> {
        if let Some(unexpected) = arguments.keys().find(|key| key.as_str() != Self::TEXT) {
            return Err(ToolError::invocation(format!(
                "{tool}() got an unexpected argument '{unexpected}'"
            )));
        }

        let value = arguments.get(Self::TEXT).ok_or_else(|| {
            ToolError::invocation(format!("{tool}() missing required argument 'text'"))
        })?;

        let text = value
            .as_str()
            .ok_or_else(|| ToolError::invalid_argument_type(Self::TEXT, "string"))?;

        Ok(Self {
            text: text.to_owned(),
        })
    }
}

impl From<&str> for TextParams {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }
}
