use crate::application::read_models::DependencyView;
use crate::shared::Result;

/// TreeFormatter port for rendering a folded dependency tree
///
/// This port abstracts the presentation format (JSON payload, text tree).
pub trait TreeFormatter {
    /// Renders the view into its textual representation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &DependencyView) -> Result<String>;
}
