use crate::application::read_models::DependencyView;
use crate::dependency_graph::domain::{DependencyTree, NodeId};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// TextTreeFormatter adapter rendering the folded tree with box-drawing guides
///
/// Each top-level entry starts a block; blocks are separated by a blank
/// line. Nodes matching the search term are highlighted when color is on.
pub struct TextTreeFormatter {
    color: bool,
}

impl TextTreeFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn label(&self, view: &DependencyView, id: &NodeId) -> String {
        if self.color && view.is_highlighted(id) {
            id.as_str().yellow().bold().to_string()
        } else {
            id.as_str().to_string()
        }
    }

    fn write_children(
        &self,
        out: &mut String,
        view: &DependencyView,
        tree: &DependencyTree,
        prefix: &str,
    ) {
        let count = tree.len();
        for (index, (id, subtree)) in tree.iter().enumerate() {
            let last = index + 1 == count;
            out.push_str(prefix);
            out.push_str(if last { LAST_BRANCH } else { BRANCH });
            out.push_str(&self.label(view, id));
            out.push('\n');

            let child_prefix = format!("{}{}", prefix, if last { SPACE } else { PIPE });
            self.write_children(out, view, subtree, &child_prefix);
        }
    }
}

impl TreeFormatter for TextTreeFormatter {
    fn format(&self, view: &DependencyView) -> Result<String> {
        if view.tree.is_empty() {
            let message = if view.highlight.is_some() {
                "(no matching dependencies)\n"
            } else {
                "(no dependencies)\n"
            };
            return Ok(message.to_string());
        }

        let mut out = String::new();
        for (index, (id, subtree)) in view.tree.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.label(view, id));
            out.push('\n');
            self.write_children(&mut out, view, subtree, "");
        }
        Ok(out)
    }
}
