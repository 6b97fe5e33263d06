use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// BuildToolRunner port for producing the dependency graph description
///
/// This port abstracts the external build tool (Maven) that analyses a
/// project and writes its resolved dependency graph to a file.
///
/// # Async Support
/// The build tool runs as a child process and can take a long time on a
/// cold local repository, so the call is async. Implementations must be
/// `Send + Sync`.
#[async_trait]
pub trait BuildToolRunner: Send + Sync {
    /// Analyses the project and writes its dependency graph to `output_file`
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory (containing pom.xml)
    /// * `output_file` - Where the graph description must be written
    ///
    /// # Errors
    /// Returns an error if:
    /// - The project has no build descriptor
    /// - The build tool cannot be started
    /// - The build tool exits with a failure status
    async fn write_dependency_graph(&self, project_path: &Path, output_file: &Path) -> Result<()>;

    /// Human-readable name of the tool for progress messages
    fn tool_name(&self) -> String;
}
