use super::NodeId;
use crate::shared::Result;

/// A directed "depends on" relation: `source` depends on `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Builds an edge from raw identifiers, validating both ends.
    pub fn from_ids(source: &str, target: &str) -> Result<Self> {
        Ok(Self::new(NodeId::new(source)?, NodeId::new(target)?))
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }
}
