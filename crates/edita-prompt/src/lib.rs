//! Prompt catalog for edita
//!
//! This crate owns everything that turns an editing request into text for
//! the editor agent:
//!
//! - **Editing vocabulary**: [`EditingMode`], [`FocusArea`] and [`ContentType`]
//! - **Prompt catalog**: base and per-mode instructions loaded from a JSON file
//! - **Analysis template**: a Jinja2 template (`{{ content }}`, or single-brace
//!   `{content}`) rendered by MiniJinja
//!
//! # Quick Start
//!
//! ```
//! use edita_prompt::{AnalysisVars, ContentType, EditingMode, PromptCatalog};
//!
//! let catalog = PromptCatalog::from_json_str(r#"{
//!     "base_instructions": "You are an editor.",
//!     "mode_instructions": { "quick_fix": "Flag the worst problems." }
//! }"#).unwrap();
//!
//! let instructions = catalog.instructions_for(EditingMode::QuickFix);
//! assert!(instructions.ends_with("Flag the worst problems."));
//!
//! let vars = AnalysisVars::new(ContentType::General, EditingMode::QuickFix, "", "Some text");
//! assert_eq!(
//!     catalog.analysis_prompt(&vars),
//!     "Please analyze and improve this content:\n\nSome text"
//! );
//! ```

mod catalog;
mod error;
mod mode;
mod template;

pub use catalog::{MODE_FOCUS_HEADING, PromptCatalog};
pub use error::{PromptError, Result};
pub use mode::{ContentType, EditingMode, FocusArea, focus_text};
pub use template::{AnalysisTemplate, AnalysisVars, DEFAULT_ANALYSIS_PROMPT, TEMPLATE_VARIABLES};
