//! Document search tool
//!
//! [`FileSearchTool`] stands in for a vector-store search. It has no backend
//! attached and answers every query with a descriptive placeholder naming the
//! query and the configured stores. A real retrieval backend plugs in here.

use crate::{Tool, ToolResult};
use edita_core::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default label shown for file search results
pub const DEFAULT_LABEL: &str = "FileSearchTool";

fn default_max_num_results() -> usize {
    3
}

/// Configuration for a [`FileSearchTool`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSearchConfig {
    /// Upper bound on results a search returns
    #[serde(default = "default_max_num_results")]
    pub max_num_results: usize,

    /// Identifiers of the vector stores searched
    #[serde(default)]
    pub vector_store_ids: Vec<String>,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            max_num_results: default_max_num_results(),
            vector_store_ids: Vec::new(),
        }
    }
}

/// Tool that searches documents in a set of vector stores
#[derive(Debug, Clone)]
pub struct FileSearchTool {
    label: String,
    config: FileSearchConfig,
}

impl FileSearchTool {
    /// Create a file search tool over the given stores
    pub fn new<I, S>(max_num_results: usize, vector_store_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_config(FileSearchConfig {
            max_num_results,
            vector_store_ids: vector_store_ids.into_iter().map(Into::into).collect(),
        })
    }

    /// Create a file search tool from a configuration value
    pub fn from_config(config: FileSearchConfig) -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            config,
        }
    }

    /// Override the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Get the tool configuration
    pub fn config(&self) -> &FileSearchConfig {
        &self.config
    }

    /// Get the result bound
    pub fn max_num_results(&self) -> usize {
        self.config.max_num_results
    }

    /// Get the searched store identifiers
    pub fn vector_store_ids(&self) -> &[String] {
        &self.config.vector_store_ids
    }
}

impl Default for FileSearchTool {
    fn default() -> Self {
        Self::from_config(FileSearchConfig::default())
    }
}

impl Tool for FileSearchTool {
    fn label(&self) -> &str {
        &self.label
    }

    fn query(&self, prompt: &str) -> Result<ToolResult> {
        debug!(
            tool = %self.label,
            stores = self.config.vector_store_ids.len(),
            max_num_results = self.config.max_num_results,
            "File search requested without a backend; returning placeholder"
        );

        Ok(format!(
            "Mocked vector search results for '{}' in stores {}",
            prompt,
            format_store_ids(&self.config.vector_store_ids)
        ))
    }
}

/// Render store ids as a bracketed, quoted list: `['a', 'b']`
fn format_store_ids(ids: &[String]) -> String {
    let quoted: Vec<String> = ids.iter().map(|id| quote_id(id)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Quote one id the way Python's `repr` quotes a string
///
/// Single quotes unless the id contains `'` and no `"`. Backslashes, the
/// chosen quote and `\n`/`\r`/`\t` are escaped; other characters pass through.
fn quote_id(id: &str) -> String {
    let quote = if id.contains('\'') && !id.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(id.len() + 2);
    out.push(quote);
    for c in id.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
