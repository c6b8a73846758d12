//! Tool-consulting agent implementation

use async_trait::async_trait;
use edita_core::{Agent, Error, Result};
use edita_tools::{Tool, ToolSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Heading that introduces the tool results in a composed response
pub const SOURCES_HEADING: &str = "Sources:";

/// An agent that answers by consulting every tool it holds
///
/// The response is the agent's trimmed instructions, a blank line, the
/// [`SOURCES_HEADING`], and one `- <label>: <result>` line per queryable tool
/// in registration order. The heading is always present; with no queryable
/// tools it is followed only by its newline.
///
/// # Example
///
/// ```
/// use edita_core::Agent;
/// use edita_runtime::ToolAgent;
/// use edita_tools::{FileSearchTool, ToolSet};
/// use std::sync::Arc;
///
/// let tools = ToolSet::new().with(Arc::new(FileSearchTool::new(5, ["abc"])));
/// let agent = ToolAgent::new("X", "Be concise.", tools);
///
/// let output = tokio_test::block_on(agent.run("hello")).unwrap();
/// assert_eq!(
///     output,
///     "Be concise.\n\nSources:\n- FileSearchTool: Mocked vector search results for 'hello' in stores ['abc']"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ToolAgent {
    name: String,
    instructions: String,
    tools: ToolSet,
}

impl ToolAgent {
    /// Create a new tool agent
    ///
    /// Blank instructions are logged as a configuration warning; the agent is
    /// still usable.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the agent
    /// * `instructions` - Persona and behavioural contract
    /// * `tools` - Tools consulted in order on every run
    pub fn new(name: impl Into<String>, instructions: impl Into<String>, tools: ToolSet) -> Self {
        let name = name.into();
        let instructions = instructions.into();
        if instructions.trim().is_empty() {
            warn!(agent = %name, "Agent created without instructions");
        }
        Self {
            name,
            instructions,
            tools,
        }
    }

    /// Create a new builder
    pub fn builder(name: impl Into<String>) -> ToolAgentBuilder {
        ToolAgentBuilder::new(name)
    }

    /// Get the agent's instructions
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Get the agent's tools
    pub fn tools(&self) -> &ToolSet {
        &self.tools
    }

    fn compose(&self, source_lines: &[String]) -> String {
        format!(
            "{}\n\n{}\n{}",
            self.instructions.trim(),
            SOURCES_HEADING,
            source_lines.join("\n")
        )
    }
}

#[async_trait]
impl Agent for ToolAgent {
    async fn run(&self, prompt: &str) -> Result<String> {
        let mut source_lines = Vec::with_capacity(self.tools.len());

        for tool in self.tools.iter().filter(|t| t.supports_query()) {
            debug!(agent = %self.name, tool = tool.label(), "Querying tool");
            let result = tool.query(prompt)?;
            source_lines.push(format!("- {}: {}", tool.label(), result));
        }

        info!(
            agent = %self.name,
            sources = source_lines.len(),
            "Agent response composed"
        );

        Ok(self.compose(&source_lines))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Builder for ToolAgent
#[derive(Debug)]
pub struct ToolAgentBuilder {
    name: String,
    instructions: String,
    tools: ToolSet,
}

impl ToolAgentBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: String::new(),
            tools: ToolSet::new(),
        }
    }

    /// Set the instructions
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Append a tool
    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Replace the tool set
    pub fn tools(mut self, tools: ToolSet) -> Self {
        self.tools = tools;
        self
    }

    /// Build the agent
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank
    pub fn build(self) -> Result<ToolAgent> {
        if self.name.trim().is_empty() {
            return Err(Error::InitializationFailed(
                "Agent name must not be empty".to_string(),
            ));
        }

        Ok(ToolAgent::new(self.name, self.instructions, self.tools))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edita_tools::{FileSearchTool, ToolResult};
    use mockall::mock;

    mock! {
        Source {}

        impl Tool for Source {
            fn label(&self) -> &str;
            fn supports_query(&self) -> bool;
            fn query(&self, prompt: &str) -> Result<ToolResult>;
        }
    }

    struct Fixed(&'static str);

    impl Tool for Fixed {
        fn label(&self) -> &str {
            self.0
        }

        fn query(&self, prompt: &str) -> Result<ToolResult> {
            Ok(format!("{} saw {}", self.0, prompt))
        }
    }

    struct Dormant;

    impl Tool for Dormant {
        fn label(&self) -> &str {
            "dormant"
        }

        fn supports_query(&self) -> bool {
            false
        }

        fn query(&self, _prompt: &str) -> Result<ToolResult> {
            Err(Error::tool("dormant", "must never be queried"))
        }
    }

    fn sources_section(output: &str) -> Vec<&str> {
        let (_, section) = output.split_once("\n\nSources:\n").unwrap();
        section.lines().collect()
    }

    #[tokio::test]
    async fn test_concrete_scenario() {
        let agent = ToolAgent::new(
            "X",
            "Be concise.",
            ToolSet::new().with(Arc::new(FileSearchTool::new(5, ["abc"]))),
        );

        let output = agent.run("hello").await.unwrap();
        assert_eq!(
            output,
            "Be concise.\n\nSources:\n- FileSearchTool: Mocked vector search results for 'hello' in stores ['abc']"
        );
    }

    #[tokio::test]
    async fn test_zero_tools_keeps_heading() {
        let agent = ToolAgent::new("X", "Be concise.", ToolSet::new());

        let output = agent.run("hello").await.unwrap();
        assert_eq!(output, "Be concise.\n\nSources:\n");
    }

    #[tokio::test]
    async fn test_source_lines_follow_registration_order() {
        for count in 0..5 {
            let labels = ["e", "d", "c", "b", "a"];
            let tools: ToolSet = labels[..count]
                .iter()
                .map(|l| Arc::new(Fixed(*l)) as Arc<dyn Tool>)
                .collect();
            let agent = ToolAgent::new("ordered", "Rules.", tools);

            let output = agent.run("p").await.unwrap();
            let lines = sources_section(&output);
            assert_eq!(lines.len(), count);
            for (line, label) in lines.iter().zip(labels) {
                assert_eq!(*line, format!("- {label}: {label} saw p"));
            }
        }
    }

    #[tokio::test]
    async fn test_skips_tools_without_query_support() {
        let agent = ToolAgent::builder("mixed")
            .instructions("Rules.")
            .tool(Arc::new(Fixed("one")))
            .tool(Arc::new(Dormant))
            .tool(Arc::new(Fixed("two")))
            .build()
            .unwrap();

        let output = agent.run("p").await.unwrap();
        assert_eq!(sources_section(&output), vec!["- one: one saw p", "- two: two saw p"]);
    }

    #[tokio::test]
    async fn test_instructions_are_trimmed() {
        let agent = ToolAgent::new("X", "  \n Edit carefully.\n\n ", ToolSet::new());

        let output = agent.run("p").await.unwrap();
        assert!(output.starts_with("Edit carefully.\n\nSources:"));
    }

    #[tokio::test]
    async fn test_empty_instructions_still_run() {
        let agent = ToolAgent::new("X", "", ToolSet::new().with(Arc::new(Fixed("t"))));

        let output = agent.run("p").await.unwrap();
        assert_eq!(output, "\n\nSources:\n- t: t saw p");
    }

    #[tokio::test]
    async fn test_run_is_idempotent() {
        let agent = ToolAgent::new(
            "X",
            "Be concise.",
            ToolSet::new()
                .with(Arc::new(FileSearchTool::new(5, ["abc"])))
                .with(Arc::new(Fixed("second"))),
        );

        let first = agent.run("same prompt").await.unwrap();
        let second = agent.run("same prompt").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_tool_fault_propagates() {
        let mut broken = MockSource::new();
        broken.expect_label().return_const("broken".to_string());
        broken.expect_supports_query().return_const(true);
        broken
            .expect_query()
            .times(1)
            .returning(|_| Err(Error::tool("broken", "connection refused")));

        let mut never = MockSource::new();
        never.expect_label().return_const("never".to_string());
        never.expect_supports_query().return_const(true);
        never.expect_query().never();

        let agent = ToolAgent::new(
            "X",
            "Rules.",
            ToolSet::new().with(Arc::new(broken)).with(Arc::new(never)),
        );

        let err = agent.run("p").await.unwrap_err();
        assert_eq!(err, Error::tool("broken", "connection refused"));
    }

    #[tokio::test]
    async fn test_prompt_reaches_every_tool() {
        let mut source = MockSource::new();
        source.expect_label().return_const("mock".to_string());
        source.expect_supports_query().return_const(true);
        source
            .expect_query()
            .withf(|prompt| prompt == "tighten this")
            .times(1)
            .returning(|_| Ok("nothing found".to_string()));

        let agent = ToolAgent::new("X", "Rules.", ToolSet::new().with(Arc::new(source)));

        let output = agent.run("tighten this").await.unwrap();
        assert!(output.ends_with("- mock: nothing found"));
    }

    #[test]
    fn test_builder_rejects_blank_name() {
        let result = ToolAgent::builder("  ").instructions("Rules.").build();
        assert!(matches!(result, Err(Error::InitializationFailed(_))));
    }

    #[test]
    fn test_accessors() {
        let agent = ToolAgent::builder("ContentFlow Editor")
            .instructions("Rules.")
            .tools(ToolSet::new().with(Arc::new(Fixed("a"))))
            .build()
            .unwrap();

        assert_eq!(agent.name(), "ContentFlow Editor");
        assert_eq!(agent.instructions(), "Rules.");
        assert_eq!(agent.tools().labels(), vec!["a"]);
    }
}
