use crate::application::dto::{ExploreRequest, ExploreResponse, GraphSource};
use crate::application::read_models::DependencyView;
use crate::dependency_graph::services::{EdgeExtractor, GraphFolder};
use crate::ports::outbound::{
    BuildToolRunner, GraphDescriptionParser, GraphDescriptionReader, ProgressReporter,
};
use crate::shared::Result;
use std::path::Path;

/// Prefix of the temporary file the build tool writes the graph into
const GRAPH_FILE_PREFIX: &str = "dependency-tree-";
const GRAPH_FILE_SUFFIX: &str = ".dot";

/// ExploreDependenciesUseCase - Core use case for building the dependency tree
///
/// Obtains a graph description (by running the build tool or reading a
/// file), parses it into edges, extracts the flat graph and folds it.
///
/// # Type Parameters
/// * `R` - BuildToolRunner implementation
/// * `D` - GraphDescriptionReader implementation
/// * `P` - GraphDescriptionParser implementation
/// * `PR` - ProgressReporter implementation
pub struct ExploreDependenciesUseCase<R, D, P, PR> {
    runner: R,
    reader: D,
    parser: P,
    progress_reporter: PR,
}

impl<R, D, P, PR> ExploreDependenciesUseCase<R, D, P, PR>
where
    R: BuildToolRunner,
    D: GraphDescriptionReader,
    P: GraphDescriptionParser,
    PR: ProgressReporter,
{
    /// Creates a new ExploreDependenciesUseCase with injected dependencies
    pub fn new(runner: R, reader: D, parser: P, progress_reporter: PR) -> Self {
        Self {
            runner,
            reader,
            parser,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Arguments
    /// * `request` - Graph source and fold strategy
    ///
    /// # Returns
    /// ExploreResponse holding the folded view
    pub async fn execute(&self, request: ExploreRequest) -> Result<ExploreResponse> {
        let source_label = request.source.label();

        // Step 1: Obtain the graph description
        let description = match &request.source {
            GraphSource::Project(project_path) => self.run_build_tool(project_path).await?,
            GraphSource::DotFile(dot_path) => {
                self.progress_reporter.report(&format!(
                    "📖 Loading dependency graph from: {}",
                    dot_path.display()
                ));
                self.reader.read_description(dot_path)?
            }
        };

        // Step 2: Parse into edges
        let edges = self.parser.parse(&source_label, &description)?;
        self.progress_reporter
            .report(&format!("✅ Parsed {} dependency edge(s)", edges.len()));

        // Step 3: Flat parent -> children map
        let flat = EdgeExtractor::extract(&edges);
        if flat.is_empty() {
            self.progress_reporter
                .report_error("⚠️  Warning: The dependency graph contains no edges.");
        }

        // Step 4: Fold
        self.progress_reporter.report(&format!(
            "🌳 Folding {} module(s) ({} order)...",
            flat.len(),
            request.strategy
        ));
        let tree = GraphFolder::fold(&flat, request.strategy);

        let view = DependencyView {
            source: source_label,
            strategy: request.strategy,
            tree,
            roots: flat.roots().into_iter().cloned().collect(),
            edge_count: flat.edge_count(),
            node_count: flat.node_count(),
            highlight: None,
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Dependency tree ready: {} node(s), {} edge(s)",
            view.node_count, view.edge_count
        ));

        Ok(ExploreResponse::new(view))
    }

    /// Runs the build tool into a temporary file and reads it back
    ///
    /// The file is removed when this returns, whether the run succeeded
    /// or not.
    async fn run_build_tool(&self, project_path: &Path) -> Result<String> {
        let tool = self.runner.tool_name();
        self.progress_reporter.report(&format!(
            "🔨 Resolving dependencies of {} with {}",
            project_path.display(),
            tool
        ));

        let graph_file = tempfile::Builder::new()
            .prefix(GRAPH_FILE_PREFIX)
            .suffix(GRAPH_FILE_SUFFIX)
            .tempfile()
            .map_err(|e| anyhow::anyhow!("Failed to create temporary graph file: {}", e))?;

        self.progress_reporter
            .start_activity(&format!("Running {} dependency:tree...", tool));
        let outcome = self
            .runner
            .write_dependency_graph(project_path, graph_file.path())
            .await;
        self.progress_reporter.finish_activity();
        outcome?;

        self.reader.read_description(graph_file.path())
    }
}
