//! maven-dependency-explorer - dependency tree explorer for Maven projects
//!
//! Runs `mvn dependency:tree` with DOT output (or reads an existing DOT
//! file), turns the edge list into a flat parent -> children map and folds
//! that map into a nested tree for display.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_graph`): Graph types and the extract/fold algorithms
//! - **Application Layer** (`application`): Use cases, DTOs, read models and the session
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Maven runner, DOT parser, filesystem, console, formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use maven_dependency_explorer::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! let use_case = ExploreDependenciesUseCase::new(
//!     MavenRunner::new(MavenSettings::default()),
//!     FileSystemReader::new(),
//!     DotParser::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ExploreRequest::new(
//!     GraphSource::Project(PathBuf::from(".")),
//!     FoldStrategy::Reverse,
//! );
//! let response = use_case.execute(request).await?;
//!
//! let output = JsonFormatter::new().format(&response.view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::dot::DotParser;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextTreeFormatter};
    pub use crate::adapters::outbound::maven::{MavenRunner, MavenSettings};
    pub use crate::application::dto::{
        DisplayOptions, ExploreRequest, ExploreResponse, GraphSource, OutputFormat,
    };
    pub use crate::application::read_models::DependencyView;
    pub use crate::application::use_cases::ExploreDependenciesUseCase;
    pub use crate::application::ExplorerSession;
    pub use crate::dependency_graph::domain::{DependencyTree, Edge, FlatGraph, NodeId};
    pub use crate::dependency_graph::services::{EdgeExtractor, FoldStrategy, GraphFolder};
    pub use crate::ports::outbound::{
        BuildToolRunner, GraphDescriptionParser, GraphDescriptionReader, OutputPresenter,
        ProgressReporter, TreeFormatter,
    };
    pub use crate::shared::Result;
}
