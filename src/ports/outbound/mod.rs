/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (build tool, file system, console).
pub mod build_tool_runner;
pub mod formatter;
pub mod graph_description_parser;
pub mod graph_description_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use build_tool_runner::BuildToolRunner;
pub use formatter::TreeFormatter;
pub use graph_description_parser::GraphDescriptionParser;
pub use graph_description_reader::GraphDescriptionReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
