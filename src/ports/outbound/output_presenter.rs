use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the formatted diff is presented.
pub trait OutputPresenter {
    /// Presents the formatted diff to the output destination
    ///
    /// # Arguments
    /// * `content` - The formatted diff to present
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The output path is a symbolic link or its directory is missing
    fn present(&self, content: &str) -> Result<()>;
}
