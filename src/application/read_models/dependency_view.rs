//! Dependency view for the presentation layer
//!
//! Wraps the folded tree together with what the formatters need to label
//! and highlight it.

use crate::application::dto::DisplayOptions;
use crate::dependency_graph::domain::{DependencyTree, NodeId};
use crate::dependency_graph::services::FoldStrategy;

/// Folded dependency tree ready for rendering
#[derive(Debug, Clone)]
pub struct DependencyView {
    /// Where the graph came from (project directory or DOT file)
    pub source: String,
    /// Strategy used to fold the flat graph
    pub strategy: FoldStrategy,
    /// The folded tree; top-level entries in discovery order
    pub tree: DependencyTree,
    /// Top-level entries that no other entry depends on
    pub roots: Vec<NodeId>,
    /// Distinct edges in the flat graph
    pub edge_count: usize,
    /// Distinct nodes in the flat graph
    pub node_count: usize,
    /// Search term to highlight, if the view was filtered
    pub highlight: Option<String>,
}

impl DependencyView {
    /// Copy of this view with search, root and depth restrictions applied
    pub fn presented(&self, options: &DisplayOptions) -> DependencyView {
        let mut tree = if options.roots_only {
            let mut roots_only = self.tree.clone();
            roots_only.retain(|key| self.roots.contains(key));
            roots_only
        } else {
            self.tree.clone()
        };

        let search = options.search_term();
        if let Some(needle) = search.as_deref() {
            tree = tree.filtered(&|id: &NodeId| Self::matches(id, needle));
        }

        // Depth counts levels below each top-level entry.
        if let Some(depth) = options.max_depth {
            tree = tree.truncated(depth.saturating_add(1));
        }

        DependencyView {
            source: self.source.clone(),
            strategy: self.strategy,
            tree,
            roots: self.roots.clone(),
            edge_count: self.edge_count,
            node_count: self.node_count,
            highlight: search,
        }
    }

    /// Whether `id` matches the current search term
    pub fn is_highlighted(&self, id: &NodeId) -> bool {
        self.highlight
            .as_deref()
            .is_some_and(|needle| Self::matches(id, needle))
    }

    /// Case-insensitive substring match; `needle` is already lowercase
    fn matches(id: &NodeId, needle: &str) -> bool {
        id.as_str().to_lowercase().contains(needle)
    }
}
