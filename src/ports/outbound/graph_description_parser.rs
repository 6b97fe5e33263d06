use crate::dependency_graph::domain::Edge;
use crate::shared::Result;

/// GraphDescriptionParser port for turning description text into edges
///
/// Implementations decode a concrete format (Graphviz DOT) into the ordered
/// edge list consumed by the edge extractor.
pub trait GraphDescriptionParser {
    /// Parses `content` into edges, in the order they appear
    ///
    /// # Arguments
    /// * `source_name` - Name of the input, used in error messages
    /// * `content` - Full text of the description
    ///
    /// # Errors
    /// Returns an error if the text is not a well-formed description
    fn parse(&self, source_name: &str, content: &str) -> Result<Vec<Edge>>;
}
