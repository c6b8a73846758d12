//! Tool framework for edita
//!
//! This crate defines the [`Tool`] capability that agents consult while
//! composing a response, an ordered [`ToolSet`] to hold them, and the
//! [`FileSearchTool`] document-search variant.

pub mod file_search;
pub mod tool;
pub mod toolset;

pub use file_search::{FileSearchConfig, FileSearchTool};
pub use tool::{Tool, ToolResult};
pub use toolset::ToolSet;
