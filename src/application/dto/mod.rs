/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod display_options;
mod explore_request;
mod explore_response;
mod output_format;

pub use display_options::DisplayOptions;
pub use explore_request::{ExploreRequest, GraphSource};
pub use explore_response::ExploreResponse;
pub use output_format::OutputFormat;
