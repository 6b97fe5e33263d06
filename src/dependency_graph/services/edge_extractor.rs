use crate::dependency_graph::domain::{Edge, FlatGraph};

/// EdgeExtractor service turning an edge list into a flat graph
///
/// Edges are consumed in file order. The first edge of a source creates its
/// entry; later edges of the same source extend it. Duplicates collapse.
/// Nodes that only ever appear as targets do not get an entry of their own.
pub struct EdgeExtractor;

impl EdgeExtractor {
    pub fn extract<'a, I>(edges: I) -> FlatGraph
    where
        I: IntoIterator<Item = &'a Edge>,
    {
        let mut graph = FlatGraph::new();
        for edge in edges {
            graph.insert_edge(edge);
        }
        graph
    }
}
