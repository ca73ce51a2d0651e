use crate::shared::Result;
use std::path::Path;

/// ReportReader port for reading dependency reports
///
/// This port abstracts the file system operations needed to load the
/// `gradle dependencies` text of the "before" and "after" builds.
pub trait ReportReader {
    /// Reads a report as UTF-8 text
    ///
    /// # Arguments
    /// * `path` - Path to the report file
    ///
    /// # Returns
    /// The raw content of the report
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is a symbolic link or exceeds the size limit
    /// - The file cannot be read or is not valid UTF-8
    fn read_report(&self, path: &Path) -> Result<String>;
}
