use crate::dependency_diff::domain::{DiffReport, DiffStrategy, DiffSummary};
use crate::dependency_diff::services::ReportRenderer;
use serde::Serialize;

/// DiffResponse - Result of comparing two reports
///
/// `before` and `after` are display labels (file names), not full paths.
#[derive(Debug, Clone, Serialize)]
pub struct DiffResponse {
    pub strategy: DiffStrategy,
    pub before: String,
    pub after: String,
    pub summary: DiffSummary,
    pub report: DiffReport,
}

impl DiffResponse {
    pub fn new(strategy: DiffStrategy, before: String, after: String, report: DiffReport) -> Self {
        Self {
            strategy,
            before,
            after,
            summary: report.summary(),
            report,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.summary.has_changes()
    }

    /// Plain-text rendering of the report.
    pub fn rendered(&self) -> String {
        ReportRenderer::render(&self.report)
    }
}
