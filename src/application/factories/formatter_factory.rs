use crate::adapters::outbound::formatters::{JsonFormatter, TextTreeFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::TreeFormatter;

/// Factory for creating tree formatters
///
/// Selects the formatter adapter for an output format; it belongs in the
/// application layer as it chooses infrastructure based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `color` - Whether the text tree may emit ANSI colors
    ///
    /// # Examples
    /// ```
    /// use maven_dependency_explorer::application::dto::OutputFormat;
    /// use maven_dependency_explorer::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Tree, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn TreeFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Tree => Box::new(TextTreeFormatter::new(color)),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use maven_dependency_explorer::application::dto::OutputFormat;
    /// use maven_dependency_explorer::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Rendering dependency tree as JSON...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering dependency tree as JSON...",
            OutputFormat::Tree => "📝 Rendering dependency tree as text...",
        }
    }
}
