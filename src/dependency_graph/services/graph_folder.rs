use crate::dependency_graph::domain::{DependencyTree, FlatGraph, NodeId};

/// Maximum nesting produced by the linked strategy.
/// Real Maven trees are far shallower; this only bounds pathological input.
const MAX_LINK_DEPTH: usize = 256;

/// How child placeholders are replaced by subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoldStrategy {
    /// One substitution pass per top-level key, last inserted key first.
    /// Subtrees are copied when substituted.
    #[default]
    Reverse,
    /// Same as `Reverse` but in insertion order. Resolves fewer levels on
    /// chains discovered top-down.
    Forward,
    /// Every child with an entry of its own is resolved to that entry's full
    /// subtree, independent of order. Expansion stops at nodes already on
    /// the current path.
    Linked,
}

impl std::str::FromStr for FoldStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reverse" => Ok(FoldStrategy::Reverse),
            "forward" => Ok(FoldStrategy::Forward),
            "linked" => Ok(FoldStrategy::Linked),
            _ => Err(format!(
                "Invalid fold strategy: {}. Please specify 'reverse', 'forward' or 'linked'",
                s
            )),
        }
    }
}

impl std::fmt::Display for FoldStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoldStrategy::Reverse => write!(f, "reverse"),
            FoldStrategy::Forward => write!(f, "forward"),
            FoldStrategy::Linked => write!(f, "linked"),
        }
    }
}

/// GraphFolder service turning a flat graph into a nested tree
///
/// Pure algorithm, no I/O. Every top-level key of the flat graph stays a
/// top-level key of the result, in insertion order.
pub struct GraphFolder;

impl GraphFolder {
    pub fn fold(flat: &FlatGraph, strategy: FoldStrategy) -> DependencyTree {
        match strategy {
            FoldStrategy::Reverse => {
                let mut graph = DependencyTree::from_flat(flat);
                Self::fold_in_place(&mut graph, flat.keys().iter().rev());
                graph
            }
            FoldStrategy::Forward => {
                let mut graph = DependencyTree::from_flat(flat);
                Self::fold_in_place(&mut graph, flat.keys().iter());
                graph
            }
            FoldStrategy::Linked => Self::link(flat),
        }
    }

    /// Runs one substitution step per key of `order` over `graph`.
    ///
    /// For a key `k`, every top-level entry that lists `k` as a direct child
    /// gets that child replaced by a copy of the current `graph[k]`.
    /// Keys without a top-level entry are skipped.
    pub fn fold_in_place<'a, I>(graph: &mut DependencyTree, order: I)
    where
        I: IntoIterator<Item = &'a NodeId>,
    {
        for index in order {
            let Some(replacement) = graph.get(index.as_str()).cloned() else {
                continue;
            };
            for (_, children) in graph.iter_mut() {
                if let Some(slot) = children.get_mut(index.as_str()) {
                    *slot = replacement.clone();
                }
            }
        }
    }

    fn link(flat: &FlatGraph) -> DependencyTree {
        flat.keys()
            .iter()
            .map(|key| {
                let mut path = vec![key.as_str()];
                (key.clone(), Self::expand(flat, key, &mut path))
            })
            .collect()
    }

    fn expand<'a>(flat: &'a FlatGraph, node: &'a NodeId, path: &mut Vec<&'a str>) -> DependencyTree {
        let Some(children) = flat.children(node.as_str()) else {
            return DependencyTree::new();
        };

        let mut resolved = DependencyTree::new();
        for child in children {
            let on_path = path.contains(&child.as_str());
            if on_path || path.len() >= MAX_LINK_DEPTH || !flat.contains_key(child.as_str()) {
                resolved.insert(child.clone(), DependencyTree::new());
                continue;
            }
            path.push(child.as_str());
            let subtree = Self::expand(flat, child, path);
            path.pop();
            resolved.insert(child.clone(), subtree);
        }
        resolved
    }
}
