use super::{Edge, NodeId};
use std::collections::{HashMap, HashSet};

/// One level of parent -> children mapping, not yet folded.
///
/// Top-level keys and each child list keep first-insertion order. The order
/// lives in an explicit key list next to the map, so folding never depends on
/// hash iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatGraph {
    keys: Vec<NodeId>,
    children: HashMap<NodeId, Vec<NodeId>>,
}

impl FlatGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `edge`, extending the children of an existing source.
    /// Returns `false` when the edge was already present.
    pub fn insert_edge(&mut self, edge: &Edge) -> bool {
        if !self.children.contains_key(edge.source().as_str()) {
            self.keys.push(edge.source().clone());
        }
        let children = self.children.entry(edge.source().clone()).or_default();

        if children.contains(edge.target()) {
            return false;
        }
        children.push(edge.target().clone());
        true
    }

    /// Top-level keys in insertion order
    pub fn keys(&self) -> &[NodeId] {
        &self.keys
    }

    pub fn children(&self, id: &str) -> Option<&[NodeId]> {
        self.children.get(id).map(Vec::as_slice)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.children.contains_key(id)
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of distinct edges
    pub fn edge_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }

    /// Every node id mentioned, either as a key or as a child.
    pub fn node_count(&self) -> usize {
        let mut seen: HashSet<&str> = self.keys.iter().map(NodeId::as_str).collect();
        for children in self.children.values() {
            seen.extend(children.iter().map(NodeId::as_str));
        }
        seen.len()
    }

    /// Top-level keys that are not a child of any other key.
    ///
    /// A self-edge does not disqualify a key. When every key is a child of
    /// another one (a pure cycle), the first inserted key is returned so the
    /// graph still has an entry point.
    pub fn roots(&self) -> Vec<&NodeId> {
        let mut referenced: HashSet<&str> = HashSet::new();
        for (parent, children) in &self.children {
            for child in children {
                if child != parent {
                    referenced.insert(child.as_str());
                }
            }
        }

        let roots: Vec<&NodeId> = self
            .keys
            .iter()
            .filter(|key| !referenced.contains(key.as_str()))
            .collect();

        if roots.is_empty() {
            self.keys.first().into_iter().collect()
        } else {
            roots
        }
    }
}
