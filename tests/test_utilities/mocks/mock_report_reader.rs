use dep_tree_diff::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ReportReader serving reports from memory
#[derive(Default)]
pub struct MockReportReader {
    pub reports: HashMap<PathBuf, String>,
    pub should_fail: bool,
}

impl MockReportReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, path: &str, content: &str) -> Self {
        self.reports.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            reports: HashMap::new(),
            should_fail: true,
        }
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock report read failure");
        }
        match self.reports.get(path) {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("No mock report for {}", path.display()),
        }
    }
}
