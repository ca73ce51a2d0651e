use crate::application::dto::{DiffRequest, DiffResponse};
use crate::dependency_diff::policies::InputSizePolicy;
use crate::dependency_diff::services::DependencyDiffer;
use crate::ports::inbound::DependencyDiffPort;
use crate::ports::outbound::{ProgressReporter, ReportReader};
use crate::shared::Result;
use std::path::Path;

/// Pipeline stages shown by the progress reporter
const TOTAL_STAGES: usize = 3;

/// CompareReportsUseCase - Core use case for comparing two dependency reports
///
/// This use case reads both reports, warns about oversized input and runs
/// the selected diff strategy. Infrastructure is injected through generics.
///
/// # Type Parameters
/// * `R` - ReportReader implementation
/// * `P` - ProgressReporter implementation
pub struct CompareReportsUseCase<R, P> {
    report_reader: R,
    progress_reporter: P,
}

impl<R, P> CompareReportsUseCase<R, P>
where
    R: ReportReader,
    P: ProgressReporter,
{
    /// Creates a new CompareReportsUseCase with injected dependencies
    pub fn new(report_reader: R, progress_reporter: P) -> Self {
        Self {
            report_reader,
            progress_reporter,
        }
    }

    /// Executes the comparison
    ///
    /// # Arguments
    /// * `request` - Paths of both reports plus strategy and parse settings
    ///
    /// # Returns
    /// DiffResponse holding the report and its summary counts
    pub fn execute(&self, request: DiffRequest) -> Result<DiffResponse> {
        let policy = InputSizePolicy::new(request.thresholds);

        // Step 1: Read both reports
        let before = self.read_and_check(&request.before_path, &policy)?;
        self.progress_reporter
            .report_progress(1, TOTAL_STAGES, Some("before report loaded"));

        let after = self.read_and_check(&request.after_path, &policy)?;
        self.progress_reporter
            .report_progress(2, TOTAL_STAGES, Some("after report loaded"));

        // Step 2: Compare
        let differ = DependencyDiffer::new(request.parse_options);
        let report = differ.diff(&before, &after, request.strategy)?;
        self.progress_reporter
            .report_progress(3, TOTAL_STAGES, Some("comparison finished"));

        let response = DiffResponse::new(
            request.strategy,
            display_label(&request.before_path),
            display_label(&request.after_path),
            report,
        );
        self.report_summary(&response);
        Ok(response)
    }

    fn read_and_check(&self, path: &Path, policy: &InputSizePolicy) -> Result<String> {
        self.progress_reporter
            .report(&format!("📖 Loading dependency report: {}", path.display()));

        let text = self.report_reader.read_report(path)?;

        for warning in policy.evaluate(&display_label(path), &text) {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
        }
        Ok(text)
    }

    fn report_summary(&self, response: &DiffResponse) {
        let summary = response.summary;
        if summary.has_changes() {
            self.progress_reporter.report_completion(&format!(
                "Comparison complete ({}): {} added, {} removed, {} changed",
                response.strategy, summary.added, summary.removed, summary.changed
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "Comparison complete ({}): no differences",
                response.strategy
            ));
        }
    }
}

impl<R, P> DependencyDiffPort for CompareReportsUseCase<R, P>
where
    R: ReportReader,
    P: ProgressReporter,
{
    fn compare(&self, request: DiffRequest) -> Result<DiffResponse> {
        self.execute(request)
    }
}

/// File name of `path`, or the whole path when it has none.
fn display_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
