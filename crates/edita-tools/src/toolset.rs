//! Ordered tool collection for agents

use crate::Tool;
use std::fmt;
use std::sync::Arc;

/// Ordered, shared collection of tools
///
/// Tools keep the order in which they were added; agents report tool results
/// in exactly this order. The set holds `Arc` handles, so the same tool may be
/// shared across several agents.
#[derive(Clone, Default)]
pub struct ToolSet {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolSet {
    /// Create an empty tool set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tool
    pub fn push(&mut self, tool: Arc<dyn Tool>) {
        self.tools.push(tool);
    }

    /// Append a tool, builder style
    pub fn with(mut self, tool: Arc<dyn Tool>) -> Self {
        self.push(tool);
        self
    }

    /// Get the first tool with the given label
    pub fn get(&self, label: &str) -> Option<Arc<dyn Tool>> {
        self.tools.iter().find(|t| t.label() == label).cloned()
    }

    /// Iterate over the tools in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Tool>> {
        self.tools.iter()
    }

    /// Labels of all tools in insertion order
    pub fn labels(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.label()).collect()
    }

    /// Number of tools that answer queries
    pub fn queryable_count(&self) -> usize {
        self.tools.iter().filter(|t| t.supports_query()).count()
    }

    /// Get the number of tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl fmt::Debug for ToolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolSet")
            .field("tools", &self.labels())
            .finish()
    }
}

impl FromIterator<Arc<dyn Tool>> for ToolSet {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Tool>>>(iter: I) -> Self {
        Self {
            tools: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Arc<dyn Tool>>> for ToolSet {
    fn from(tools: Vec<Arc<dyn Tool>>) -> Self {
        Self { tools }
    }
}

impl<'a> IntoIterator for &'a ToolSet {
    type Item = &'a Arc<dyn Tool>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn Tool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tools.iter()
    }
}
