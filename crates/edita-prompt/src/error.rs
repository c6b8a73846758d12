//! Error types for prompt operations

use thiserror::Error;

/// Result type for prompt operations
pub type Result<T> = std::result::Result<T, PromptError>;

/// Errors that can occur during prompt operations
#[derive(Error, Debug)]
pub enum PromptError {
    /// Prompt file could not be read
    #[error("Failed to load prompt file '{path}': {detail}")]
    FileLoadError { path: String, detail: String },

    /// Prompt file is not a valid catalog
    #[error("Failed to parse prompts from '{source_name}': {detail}")]
    ParseError { source_name: String, detail: String },

    /// Template rendering failed
    #[error("Failed to render template '{name}': {detail}")]
    RenderError { name: String, detail: String },

    /// Unknown editing mode, focus area or content type key
    #[error("Unknown {kind} '{key}'")]
    UnknownKey { kind: &'static str, key: String },
}

impl From<PromptError> for edita_core::Error {
    fn from(err: PromptError) -> Self {
        edita_core::Error::ProcessingFailed(err.to_string())
    }
}
