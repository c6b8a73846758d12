//! Prompt catalog loaded from a JSON prompt file
//!
//! A prompt file looks like:
//!
//! ```json
//! {
//!   "base_instructions": "You are ContentFlow, an editor...",
//!   "mode_instructions": {
//!     "comprehensive": "Review everything...",
//!     "quick_fix": "Flag the top problems..."
//!   },
//!   "analysis_prompt": "Content type: {{ content_type }}\n\n{{ content }}"
//! }
//! ```
//!
//! Any other top-level sections are kept as-is so they can be listed.

use crate::template::{AnalysisTemplate, AnalysisVars, DEFAULT_ANALYSIS_PROMPT};
use crate::{EditingMode, PromptError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Heading placed between the base and mode-specific instructions
pub const MODE_FOCUS_HEADING: &str = "**Mode-Specific Focus:**";

/// Prompts that drive the editor agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptCatalog {
    /// Instructions shared by every mode
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub base_instructions: String,

    /// Extra instructions keyed by editing mode key
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mode_instructions: BTreeMap<String, String>,

    /// Jinja template for the analysis prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_prompt: Option<String>,

    /// Unrecognised top-level sections
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl PromptCatalog {
    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PromptError::FileLoadError {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;

        let catalog = Self::parse(&content, &path.display().to_string())?;
        debug!(
            path = %path.display(),
            sections = catalog.sections().len(),
            "Prompt catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, "<string>")
    }

    fn parse(json: &str, source_name: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PromptError::ParseError {
            source_name: source_name.to_string(),
            detail: e.to_string(),
        })
    }

    /// Whether the catalog holds no prompts at all
    pub fn is_empty(&self) -> bool {
        self.sections().is_empty()
    }

    /// Names of the top-level sections present
    pub fn sections(&self) -> Vec<&str> {
        let mut sections = Vec::new();
        if !self.base_instructions.is_empty() {
            sections.push("base_instructions");
        }
        if !self.mode_instructions.is_empty() {
            sections.push("mode_instructions");
        }
        if self.analysis_prompt.is_some() {
            sections.push("analysis_prompt");
        }
        sections.extend(self.extra.keys().map(String::as_str));
        sections
    }

    /// Mode keys that have instructions
    pub fn modes(&self) -> Vec<&str> {
        self.mode_instructions.keys().map(String::as_str).collect()
    }

    /// Whether both the base and the mode's instructions are present
    pub fn has_instructions_for(&self, mode: EditingMode) -> bool {
        !self.base_instructions.is_empty() && !self.mode_text(mode).is_empty()
    }

    fn mode_text(&self, mode: EditingMode) -> &str {
        self.mode_instructions
            .get(mode.key())
            .map_or("", String::as_str)
    }

    /// Agent instructions for the mode
    ///
    /// Missing base or mode instructions are logged as a warning; the result
    /// is composed from whatever is present.
    pub fn instructions_for(&self, mode: EditingMode) -> String {
        if !self.has_instructions_for(mode) {
            warn!(mode = mode.key(), "Missing instructions in prompt catalog");
        }

        format!(
            "{}\n\n{}\n{}",
            self.base_instructions,
            MODE_FOCUS_HEADING,
            self.mode_text(mode)
        )
    }

    /// The analysis template, or the built-in one
    pub fn analysis_template(&self) -> AnalysisTemplate {
        AnalysisTemplate::new(
            "analysis_prompt",
            self.analysis_prompt
                .as_deref()
                .unwrap_or(DEFAULT_ANALYSIS_PROMPT),
        )
    }

    /// Render the analysis prompt for one request
    ///
    /// A template that fails to render (for instance one referencing an
    /// unknown variable) or whose output lacks the content is logged and
    /// replaced by a plain `Analyze and improve:` prompt around the content.
    pub fn analysis_prompt(&self, vars: &AnalysisVars<'_>) -> String {
        match self.analysis_template().render(vars) {
            Ok(prompt) if prompt.contains(vars.content) => prompt,
            Ok(_) => {
                warn!("Analysis prompt template omits the content, using fallback prompt");
                fallback_prompt(vars.content)
            }
            Err(e) => {
                warn!(error = %e, "Analysis prompt template failed, using fallback prompt");
                fallback_prompt(vars.content)
            }
        }
    }
}

fn fallback_prompt(content: &str) -> String {
    format!("Analyze and improve:\n\n{content}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentType;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "base_instructions": "You are an editor.",
        "mode_instructions": {
            "comprehensive": "Review everything.",
            "quick_fix": "Flag the worst problems."
        },
        "analysis_prompt": "[{{ content_type }} / {{ editing_mode }}] {{ content }}",
        "style_guide": { "voice": "active" }
    }"#;

    fn vars(content: &str) -> AnalysisVars<'_> {
        AnalysisVars::new(ContentType::Email, EditingMode::Comprehensive, "", content)
    }

    #[test]
    fn test_parse_sections_and_modes() {
        let catalog = PromptCatalog::from_json_str(SAMPLE).unwrap();

        assert!(!catalog.is_empty());
        assert_eq!(
            catalog.sections(),
            vec![
                "base_instructions",
                "mode_instructions",
                "analysis_prompt",
                "style_guide"
            ]
        );
        assert_eq!(catalog.modes(), vec!["comprehensive", "quick_fix"]);
    }

    #[test]
    fn test_instructions_for_mode() {
        let catalog = PromptCatalog::from_json_str(SAMPLE).unwrap();

        assert!(catalog.has_instructions_for(EditingMode::QuickFix));
        assert_eq!(
            catalog.instructions_for(EditingMode::QuickFix),
            "You are an editor.\n\n**Mode-Specific Focus:**\nFlag the worst problems."
        );
    }

    #[test]
    fn test_missing_mode_instructions_still_compose() {
        let catalog = PromptCatalog::from_json_str(SAMPLE).unwrap();

        assert!(!catalog.has_instructions_for(EditingMode::Newsletter));
        assert_eq!(
            catalog.instructions_for(EditingMode::Newsletter),
            "You are an editor.\n\n**Mode-Specific Focus:**\n"
        );
    }

    #[test]
    fn test_analysis_prompt_from_catalog() {
        let catalog = PromptCatalog::from_json_str(SAMPLE).unwrap();

        assert_eq!(
            catalog.analysis_prompt(&vars("Hi team")),
            "[email / Full Analysis & Editing] Hi team"
        );
    }

    #[test]
    fn test_default_analysis_prompt() {
        let catalog = PromptCatalog::from_json_str(r#"{"base_instructions": "x"}"#).unwrap();

        assert_eq!(
            catalog.analysis_prompt(&vars("Hi team")),
            "Please analyze and improve this content:\n\nHi team"
        );
    }

    #[test]
    fn test_analysis_prompt_falls_back_on_unknown_variable() {
        let catalog =
            PromptCatalog::from_json_str(r#"{"analysis_prompt": "{{ tone }} {{ content }}"}"#)
                .unwrap();

        assert_eq!(
            catalog.analysis_prompt(&vars("Hi team")),
            "Analyze and improve:\n\nHi team"
        );
    }

    #[test]
    fn test_single_brace_analysis_prompt() {
        let catalog = PromptCatalog::from_json_str(
            r#"{"analysis_prompt": "Analyze this {content_type}:\n\n{content}"}"#,
        )
        .unwrap();

        assert_eq!(
            catalog.analysis_prompt(&vars("MY DRAFT")),
            "Analyze this email:\n\nMY DRAFT"
        );
    }

    #[test]
    fn test_analysis_prompt_falls_back_when_content_is_missing() {
        let catalog =
            PromptCatalog::from_json_str(r#"{"analysis_prompt": "Improve the draft."}"#).unwrap();

        assert_eq!(
            catalog.analysis_prompt(&vars("MY DRAFT")),
            "Analyze and improve:\n\nMY DRAFT"
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = PromptCatalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog, PromptCatalog::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = PromptCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.base_instructions, "You are an editor.");
        assert!(catalog.extra.contains_key("style_guide"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PromptCatalog::load(dir.path().join("prompts.json")).unwrap_err();
        assert!(matches!(err, PromptError::FileLoadError { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = PromptCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, PromptError::ParseError { .. }));
    }
}
