//! Runner that executes an agent and normalizes its output
//!
//! The [`Runner`] is stateless: it awaits the agent's `run`, wraps the text in
//! an [`ExecutionResult`], and lets every fault through unchanged. There are no
//! retries and no timeouts.

use edita_core::{Agent, Error, Result};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Uniform envelope for an agent invocation's final text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    final_output: String,
}

impl ExecutionResult {
    /// Wrap a final output
    pub fn new(final_output: impl Into<String>) -> Self {
        Self {
            final_output: final_output.into(),
        }
    }

    /// Get the final composed text
    pub fn final_output(&self) -> &str {
        &self.final_output
    }

    /// Take the final composed text
    pub fn into_final_output(self) -> String {
        self.final_output
    }
}

impl fmt::Display for ExecutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.final_output)
    }
}

/// Stateless driver for agents
///
/// # Example
///
/// ```
/// use edita_runtime::{Runner, ToolAgent};
/// use edita_tools::ToolSet;
///
/// # async fn example() -> edita_core::Result<()> {
/// let agent = ToolAgent::new("editor", "Be concise.", ToolSet::new());
/// let result = Runner::run(&agent, "hello").await?;
/// assert!(result.final_output().starts_with("Be concise."));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Runner;

impl Runner {
    /// Run the agent against the prompt
    pub async fn run(agent: &dyn Agent, prompt: &str) -> Result<ExecutionResult> {
        info!(agent = agent.name(), "Running agent");
        let output = agent.run(prompt).await?;
        Ok(ExecutionResult::new(output))
    }

    /// Run the agent to completion on the current thread
    ///
    /// For callers that cannot await. Outside a tokio runtime a current-thread
    /// runtime is started for the call. Inside one, the run is driven on a
    /// scoped helper thread, because blocking a runtime thread on its own
    /// runtime would deadlock or panic. The result is identical to
    /// [`Runner::run`] either way.
    pub fn run_blocking(agent: &dyn Agent, prompt: &str) -> Result<ExecutionResult> {
        if tokio::runtime::Handle::try_current().is_err() {
            return Self::block_on_fresh_runtime(agent, prompt);
        }

        debug!(
            agent = agent.name(),
            "Already inside a runtime, driving agent on a helper thread"
        );
        std::thread::scope(|scope| {
            scope
                .spawn(|| Self::block_on_fresh_runtime(agent, prompt))
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
        })
    }

    fn block_on_fresh_runtime(agent: &dyn Agent, prompt: &str) -> Result<ExecutionResult> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::ProcessingFailed(format!("Failed to start runtime: {e}")))?;
        runtime.block_on(Self::run(agent, prompt))
    }
}
