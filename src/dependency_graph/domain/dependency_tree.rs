use super::{FlatGraph, NodeId};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Recursive, ordered mapping `NodeId -> DependencyTree`.
///
/// A leaf is simply an empty tree. The same type is used for the working
/// state of the folder (one level deep) and for the folded result, which is
/// what gets handed to the formatters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyTree {
    entries: Vec<(NodeId, DependencyTree)>,
}

impl DependencyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry per top-level key of `flat`, each holding its direct
    /// children as leaves.
    pub fn from_flat(flat: &FlatGraph) -> Self {
        flat.keys()
            .iter()
            .map(|key| {
                let children: DependencyTree = flat
                    .children(key.as_str())
                    .unwrap_or_default()
                    .iter()
                    .map(|child| (child.clone(), DependencyTree::new()))
                    .collect();
                (key.clone(), children)
            })
            .collect()
    }

    /// Inserts or replaces the subtree stored under `id`.
    /// A replaced entry keeps its position.
    pub fn insert(&mut self, id: NodeId, subtree: DependencyTree) {
        match self.get_mut(id.as_str()) {
            Some(slot) => *slot = subtree,
            None => self.entries.push((id, subtree)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&DependencyTree> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_str() == id)
            .map(|(_, subtree)| subtree)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut DependencyTree> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key.as_str() == id)
            .map(|(_, subtree)| subtree)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &NodeId> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &DependencyTree)> {
        self.entries.iter().map(|(key, subtree)| (key, subtree))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&NodeId, &mut DependencyTree)> {
        self.entries.iter_mut().map(|(key, subtree)| (&*key, subtree))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Follows `path` one key per level, e.g. `["A", "B", "C"]` for `A.B.C`.
    pub fn path(&self, path: &[&str]) -> Option<&DependencyTree> {
        path.iter()
            .try_fold(self, |subtree, segment| subtree.get(segment))
    }

    /// Total number of entries at every level.
    pub fn node_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, subtree)| 1 + subtree.node_count())
            .sum()
    }

    /// Whether `id` appears as a key at any level.
    pub fn contains_node(&self, id: &str) -> bool {
        self.entries
            .iter()
            .any(|(key, subtree)| key.as_str() == id || subtree.contains_node(id))
    }

    /// Keeps only the top-level entries whose key satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&NodeId) -> bool) {
        self.entries.retain(|(key, _)| keep(key));
    }

    /// Copy of this tree cut off after `max_depth` levels.
    pub fn truncated(&self, max_depth: usize) -> DependencyTree {
        if max_depth == 0 {
            return DependencyTree::new();
        }
        self.entries
            .iter()
            .map(|(key, subtree)| (key.clone(), subtree.truncated(max_depth - 1)))
            .collect()
    }

    /// Copy of this tree reduced to the branches leading to a node that
    /// satisfies `matches`. A matching node keeps its whole subtree.
    pub fn filtered<F>(&self, matches: &F) -> DependencyTree
    where
        F: Fn(&NodeId) -> bool,
    {
        self.entries
            .iter()
            .filter_map(|(key, subtree)| {
                if matches(key) {
                    return Some((key.clone(), subtree.clone()));
                }
                let kept = subtree.filtered(matches);
                (!kept.is_empty()).then(|| (key.clone(), kept))
            })
            .collect()
    }
}

impl FromIterator<(NodeId, DependencyTree)> for DependencyTree {
    fn from_iter<I: IntoIterator<Item = (NodeId, DependencyTree)>>(iter: I) -> Self {
        let mut tree = DependencyTree::new();
        for (key, subtree) in iter {
            tree.insert(key, subtree);
        }
        tree
    }
}

impl Serialize for DependencyTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, subtree) in &self.entries {
            map.serialize_entry(key, subtree)?;
        }
        map.end()
    }
}
