use crate::dependency_graph::services::FoldStrategy;
use std::path::PathBuf;

/// Where the dependency graph description comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// Maven project directory; the graph is produced by running Maven
    Project(PathBuf),
    /// Existing DOT file, read as is
    DotFile(PathBuf),
}

impl GraphSource {
    /// Human-readable label used in progress messages and the view
    pub fn label(&self) -> String {
        match self {
            GraphSource::Project(path) | GraphSource::DotFile(path) => {
                path.display().to_string()
            }
        }
    }
}

/// ExploreRequest - Internal request DTO for the explore use case
#[derive(Debug, Clone)]
pub struct ExploreRequest {
    pub source: GraphSource,
    pub strategy: FoldStrategy,
}

impl ExploreRequest {
    pub fn new(source: GraphSource, strategy: FoldStrategy) -> Self {
        Self { source, strategy }
    }
}
