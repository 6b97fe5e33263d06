//! Read models for CQRS-lite pattern
//!
//! View-optimized structs handed to the formatters.

pub mod dependency_view;

pub use dependency_view::DependencyView;
