//! Line-oriented view models for formatted documents
//!
//! The conversion and formatting core is pure string-to-string; everything
//! presentational lives here. Collapse state is a map from node path to
//! visibility held by the rendering layer, fully separate from the
//! formatting functions, so toggling never touches or re-derives the
//! underlying lines.

pub mod json_lines;
pub mod xml_lines;

use std::collections::HashMap;

/// Per-node expand/collapse state.
///
/// Every node defaults to expanded; toggling one node never affects
/// sibling or ancestor state.
#[derive(Debug, Clone, Default)]
pub struct CollapseState {
    collapsed: HashMap<String, bool>,
}

impl CollapseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        !self.collapsed.get(path).copied().unwrap_or(false)
    }

    pub fn collapse(&mut self, path: &str) {
        self.collapsed.insert(path.to_string(), true);
    }

    pub fn expand(&mut self, path: &str) {
        self.collapsed.insert(path.to_string(), false);
    }

    pub fn toggle(&mut self, path: &str) {
        let expanded = self.is_expanded(path);
        self.collapsed.insert(path.to_string(), expanded);
    }
}
