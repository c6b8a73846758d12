//! Content editor: builds the editor agent per request and runs it

use anyhow::{Context as _, Result, bail, ensure};
use edita_prompt::{
    AnalysisVars, ContentType, EditingMode, FocusArea, PromptCatalog, focus_text,
};
use edita_runtime::{ExecutionResult, Runner, ToolAgent};
use edita_tools::FileSearchTool;
use edita_utils::Config;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// Name of the agent that answers editing requests
pub const EDITOR_NAME: &str = "ContentFlow Editor";

/// One editing request from the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRequest {
    pub content: String,
    pub mode: EditingMode,
    pub content_type: ContentType,
    pub focus_areas: Vec<FocusArea>,
}

/// Orchestrates prompt construction and agent execution
pub struct ContentEditor {
    config: Config,
    catalog: PromptCatalog,
}

impl ContentEditor {
    /// Create an editor from a configuration and a loaded catalog
    pub fn new(config: Config, catalog: PromptCatalog) -> Self {
        Self { config, catalog }
    }

    /// Create an editor, loading prompts from the configured path
    ///
    /// A prompt file that cannot be loaded is logged and leaves the catalog
    /// empty; requests then fail with a "No prompts loaded" error.
    pub fn load(config: Config) -> Self {
        let catalog = load_catalog_or_empty(&config.prompts_path);
        Self::new(config, catalog)
    }

    /// Get the prompt catalog
    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// Re-read the prompt file
    ///
    /// On failure the previous catalog stays in place.
    pub fn reload_prompts(&mut self) -> Result<()> {
        let catalog = PromptCatalog::load(&self.config.prompts_path).context("Reload failed")?;
        info!(sections = catalog.sections().len(), "Prompts reloaded");
        self.catalog = catalog;
        Ok(())
    }

    /// Build a fresh editor agent for the mode
    pub fn create_agent(&self, mode: EditingMode) -> Result<ToolAgent> {
        if self.catalog.is_empty() {
            bail!(
                "No prompts loaded. Check {}",
                self.config.prompts_path.display()
            );
        }

        let file_search = FileSearchTool::new(
            self.config.max_num_results,
            [self.config.vector_store_id.clone()],
        );

        let agent = ToolAgent::builder(EDITOR_NAME)
            .instructions(self.catalog.instructions_for(mode))
            .tool(Arc::new(file_search))
            .build()?;
        Ok(agent)
    }

    /// Render the analysis prompt for a request
    pub fn build_prompt(&self, request: &EditRequest) -> String {
        let focus = focus_text(request.mode, &request.focus_areas);
        let vars = AnalysisVars::new(request.content_type, request.mode, &focus, &request.content);
        self.catalog.analysis_prompt(&vars)
    }

    /// Answer an editing request
    pub async fn respond(&self, request: &EditRequest) -> Result<ExecutionResult> {
        ensure!(!request.content.trim().is_empty(), "No content to edit");

        let agent = self.create_agent(request.mode)?;
        let prompt = self.build_prompt(request);

        info!(
            mode = request.mode.key(),
            content_type = request.content_type.key(),
            focus_areas = request.focus_areas.len(),
            "Editing content"
        );
        let result = Runner::run(&agent, &prompt).await?;
        Ok(result)
    }
}

fn load_catalog_or_empty(path: &Path) -> PromptCatalog {
    match PromptCatalog::load(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "Failed to load prompts");
            PromptCatalog::default()
        }
    }
}
