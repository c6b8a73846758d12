//! Tool trait definition

use edita_core::Result;

/// Textual result a tool produces for one query
pub type ToolResult = String;

/// Trait for tools that agents can query
///
/// Tools augment an agent's answer with external information. A tool that
/// cannot reach its backend must describe the problem in the returned text
/// rather than failing: the agent does not special-case tool trouble, so an
/// `Err` from [`Tool::query`] aborts the whole agent run.
///
/// `query` takes `&self`; a tool never mutates shared state while answering.
pub trait Tool: Send + Sync {
    /// Stable label shown next to this tool's result
    ///
    /// Set when the tool is constructed, independent of the implementing type.
    fn label(&self) -> &str;

    /// Whether this tool answers queries
    ///
    /// Agents skip tools that report `false`.
    fn supports_query(&self) -> bool {
        true
    }

    /// Answer a query for the given prompt text
    fn query(&self, prompt: &str) -> Result<ToolResult>;
}
