use crate::application::dto::{DiffRequest, DiffResponse};
use crate::shared::Result;

/// DependencyDiffPort - Inbound port for the report comparison use case
///
/// This port defines the interface that external adapters (CLI, tests)
/// use to compare two dependency reports.
pub trait DependencyDiffPort {
    /// Compares the two reports named in the request
    ///
    /// # Arguments
    /// * `request` - Input paths, strategy and parse settings
    ///
    /// # Returns
    /// The diff report with its summary counts
    ///
    /// # Errors
    /// Returns an error if:
    /// - Either report cannot be read
    /// - A malformed line is found in strict mode
    fn compare(&self, request: DiffRequest) -> Result<DiffResponse>;
}
