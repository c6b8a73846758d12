//! Error types for edita-core

use thiserror::Error;

/// Result type alias for edita-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for agent and tool operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Agent construction failed
    #[error("Agent initialization failed: {0}")]
    InitializationFailed(String),

    /// Agent processing failed
    #[error("Agent processing failed: {0}")]
    ProcessingFailed(String),

    /// A tool raised instead of degrading to a textual result
    #[error("Tool '{tool}' failed: {detail}")]
    ToolFailed { tool: String, detail: String },
}

impl Error {
    /// Build a [`Error::ToolFailed`] for the tool with the given label
    pub fn tool(tool: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ToolFailed {
            tool: tool.into(),
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_display() {
        let err = Error::tool("FileSearchTool", "index offline");
        assert_eq!(err.to_string(), "Tool 'FileSearchTool' failed: index offline");
    }

    #[test]
    fn test_every_variant_names_its_source() {
        let errors = [
            Error::InitializationFailed("a".to_string()),
            Error::ProcessingFailed("b".to_string()),
            Error::tool("c", "d"),
        ];

        for err in errors {
            let prefix = match &err {
                Error::InitializationFailed(_) => "Agent initialization failed",
                Error::ProcessingFailed(_) => "Agent processing failed",
                Error::ToolFailed { .. } => "Tool 'c' failed",
            };
            assert!(err.to_string().starts_with(prefix));
        }
    }

    #[test]
    fn test_initialization_display() {
        let err = Error::InitializationFailed("name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Agent initialization failed: name must not be empty"
        );
    }
}
