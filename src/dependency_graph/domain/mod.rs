pub mod dependency_tree;
pub mod edge;
pub mod flat_graph;
pub mod node_id;

pub use dependency_tree::DependencyTree;
pub use edge::Edge;
pub use flat_graph::FlatGraph;
pub use node_id::NodeId;
