/// Mock implementations for testing
mod mock_build_tool_runner;
mod mock_graph_description_reader;
mod mock_progress_reporter;

pub use mock_build_tool_runner::MockBuildToolRunner;
pub use mock_graph_description_reader::MockGraphDescriptionReader;
pub use mock_progress_reporter::MockProgressReporter;
