use crate::dependency_diff::domain::{DiffStrategy, ParseOptions};
use crate::dependency_diff::policies::InputThresholds;
use std::path::PathBuf;

/// DiffRequest - Internal request DTO for the comparison use case
#[derive(Debug, Clone)]
pub struct DiffRequest {
    /// Report of the baseline build
    pub before_path: PathBuf,
    /// Report of the build being checked
    pub after_path: PathBuf,
    pub strategy: DiffStrategy,
    pub parse_options: ParseOptions,
    /// Limits above which a "large report" warning is shown
    pub thresholds: InputThresholds,
}

impl DiffRequest {
    pub fn new(before_path: PathBuf, after_path: PathBuf, strategy: DiffStrategy) -> Self {
        Self {
            before_path,
            after_path,
            strategy,
            parse_options: ParseOptions::default(),
            thresholds: InputThresholds::default(),
        }
    }

    pub fn with_parse_options(mut self, parse_options: ParseOptions) -> Self {
        self.parse_options = parse_options;
        self
    }

    pub fn with_thresholds(mut self, thresholds: InputThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}
