//! Core Agent trait definition

use crate::Result;
use async_trait::async_trait;

/// Core trait that all agents must implement
///
/// An agent answers a single prompt with a composed textual response. `run`
/// is asynchronous so that tools backed by real I/O can suspend without
/// blocking the caller; callers that cannot await drive it through
/// the runtime crate's blocking runner.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Answer the prompt
    ///
    /// Faults raised while answering propagate to the caller unchanged.
    async fn run(&self, prompt: &str) -> Result<String>;

    /// Get the agent's name
    fn name(&self) -> &str;
}
