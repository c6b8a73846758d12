//! Agent runtime for edita
//!
//! This crate provides the concrete [`ToolAgent`] and the stateless
//! [`Runner`] that executes an agent and wraps its text in an
//! [`ExecutionResult`].

pub mod agents;
pub mod runner;

// Re-export key types
pub use agents::{SOURCES_HEADING, ToolAgent, ToolAgentBuilder};
pub use runner::{ExecutionResult, Runner};
