mod edge_extractor;
mod graph_folder;

pub use edge_extractor::EdgeExtractor;
pub use graph_folder::{FoldStrategy, GraphFolder};
