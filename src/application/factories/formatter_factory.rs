use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DiffFormatter;

/// Factory for creating diff formatters
///
/// Keeps the choice of formatter adapter out of `main`, following the
/// Factory Pattern.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `color` - Whether ANSI colors are allowed (text format only)
    ///
    /// # Examples
    /// ```
    /// use dep_tree_diff::application::dto::OutputFormat;
    /// use dep_tree_diff::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn DiffFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(color)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dep_tree_diff::application::dto::OutputFormat;
    /// use dep_tree_diff::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating text output...",
            OutputFormat::Markdown => "📝 Generating Markdown output...",
            OutputFormat::Json => "📝 Generating JSON output...",
        }
    }
}
