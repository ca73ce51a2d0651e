use crate::application::dto::DiffResponse;
use crate::shared::Result;

/// DiffFormatter port for rendering a comparison result
///
/// This port abstracts the output format (plain text, Markdown, JSON).
pub trait DiffFormatter {
    /// Formats a comparison result
    ///
    /// # Arguments
    /// * `response` - The diff report together with the compared file labels
    ///
    /// # Returns
    /// Formatted content ready for presentation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &DiffResponse) -> Result<String>;
}
