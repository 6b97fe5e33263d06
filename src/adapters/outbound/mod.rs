/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod dot;
pub mod filesystem;
pub mod formatters;
pub mod maven;
