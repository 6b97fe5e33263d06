/// Dependency graph domain: node model, edge extraction and folding.
///
/// Everything below this module is pure and free of I/O.
pub mod domain;
pub mod services;
