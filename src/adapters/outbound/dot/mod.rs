/// Graphviz DOT adapter decoding Maven's dependency graph output
mod dot_parser;

pub use dot_parser::DotParser;
