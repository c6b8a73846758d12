//! Concrete agent implementations
//!
//! - ToolAgent: composes its instructions with the results of every tool it holds

pub mod tool;

pub use tool::{SOURCES_HEADING, ToolAgent, ToolAgentBuilder};
