/// ProgressReporter port for reporting progress during a comparison
///
/// This port abstracts progress reporting (e.g., to stderr) so the
/// formatted diff on stdout stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the pipeline stages
    ///
    /// # Arguments
    /// * `current` - Stages completed so far
    /// * `total` - Total number of stages
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
