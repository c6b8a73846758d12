//! MiniJinja-based analysis prompt template
//!
//! The analysis template turns the user's content into the prompt handed to
//! the editor agent. It is rendered in strict mode: referencing a variable
//! that is not one of [`AnalysisVars`]' fields is a render error, not an
//! empty string.
//!
//! Prompt files may also use single-brace placeholders such as `{content}`.
//! These are rewritten to Jinja expressions before rendering, but only for
//! the names in [`TEMPLATE_VARIABLES`].

use crate::{ContentType, EditingMode, PromptError, Result};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

/// Template used when the catalog does not define `analysis_prompt`
pub const DEFAULT_ANALYSIS_PROMPT: &str = "Please analyze and improve this content:\n\n{{ content }}";

/// Names an analysis template may reference
pub const TEMPLATE_VARIABLES: [&str; 4] = ["content_type", "editing_mode", "focus_text", "content"];

/// Variables available to an analysis template
///
/// Template syntax is standard Jinja2: `{{ content }}`, `{{ editing_mode | upper }}`,
/// `{% if focus_text %}...{% endif %}`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisVars<'a> {
    /// Content type key, e.g. `blog_post`
    pub content_type: &'a str,
    /// Editing mode label, e.g. `Full Analysis & Editing`
    pub editing_mode: &'a str,
    /// Focus instruction, empty unless targeting specific issues
    pub focus_text: &'a str,
    /// The text being edited
    pub content: &'a str,
}

impl<'a> AnalysisVars<'a> {
    /// Collect template variables for one editing request
    pub fn new(
        content_type: ContentType,
        mode: EditingMode,
        focus_text: &'a str,
        content: &'a str,
    ) -> Self {
        Self {
            content_type: content_type.key(),
            editing_mode: mode.label(),
            focus_text,
            content,
        }
    }
}

/// A named Jinja template rendered against [`AnalysisVars`]
#[derive(Debug, Clone)]
pub struct AnalysisTemplate {
    name: String,
    source: String,
}

impl AnalysisTemplate {
    /// Create a template from its source text
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// The built-in analysis template
    pub fn default_analysis() -> Self {
        Self::new("analysis_prompt", DEFAULT_ANALYSIS_PROMPT)
    }

    /// Get the template name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw template source
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render the template
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::RenderError`] if the template does not parse or
    /// references an unknown variable.
    pub fn render(&self, vars: &AnalysisVars<'_>) -> Result<String> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let value = minijinja::value::Value::from_serialize(vars);

        env.render_str(&expand_single_braces(&self.source), value)
            .map_err(|e| PromptError::RenderError {
                name: self.name.clone(),
                detail: e.to_string(),
            })
    }
}

/// Rewrite `{name}` into `{{ name }}` for known template variables
///
/// Doubled braces and Jinja tags are left alone.
fn expand_single_braces(source: &str) -> String {
    let bytes = source.as_bytes();
    let mut out = String::with_capacity(source.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = source[pos..].find('{') {
        let start = pos + offset;
        pos = start + 1;

        let preceded = start > 0 && bytes[start - 1] == b'{';
        if preceded || bytes.get(start + 1) == Some(&b'{') {
            continue;
        }
        let Some(len) = source[start + 1..].find('}') else {
            break;
        };
        let end = start + 1 + len;
        let name = &source[start + 1..end];
        if !TEMPLATE_VARIABLES.contains(&name) || bytes.get(end + 1) == Some(&b'}') {
            continue;
        }

        out.push_str(&source[copied..start]);
        out.push_str("{{ ");
        out.push_str(name);
        out.push_str(" }}");
        copied = end + 1;
        pos = end + 1;
    }

    out.push_str(&source[copied..]);
    out
}
