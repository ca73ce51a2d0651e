use crate::dependency_diff::services::{dependency_section, split_lines};
use crate::shared::error::DiffError;
use crate::shared::Result;
use serde::Deserialize;

/// Default byte limit before a report counts as large (1 MiB)
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;

/// Default total line limit
pub const DEFAULT_MAX_LINES: usize = 15_000;

/// Default limit for lines inside the dependency section
pub const DEFAULT_MAX_DEPENDENCY_SECTION_LINES: usize = 5_000;

/// Size limits above which a report is flagged as large.
///
/// Exceeding a limit never stops the comparison; it only produces warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputThresholds {
    pub max_bytes: u64,
    pub max_lines: usize,
    pub max_dependency_section_lines: usize,
}

impl Default for InputThresholds {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_lines: DEFAULT_MAX_LINES,
            max_dependency_section_lines: DEFAULT_MAX_DEPENDENCY_SECTION_LINES,
        }
    }
}

impl InputThresholds {
    /// Rejects zero limits, which would flag every report.
    pub fn validate(&self) -> Result<()> {
        let zero = [
            ("max_bytes", self.max_bytes == 0),
            ("max_lines", self.max_lines == 0),
            (
                "max_dependency_section_lines",
                self.max_dependency_section_lines == 0,
            ),
        ];
        for (name, is_zero) in zero {
            if is_zero {
                return Err(DiffError::Validation {
                    message: format!("threshold `{}` must be greater than 0", name),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// InputSizePolicy decides whether a report is large enough to warn about.
///
/// Large reports still diff correctly; the warning tells the user that the
/// tree output may be long and that the flattened mode is easier to read.
pub struct InputSizePolicy {
    thresholds: InputThresholds,
}

impl InputSizePolicy {
    pub fn new(thresholds: InputThresholds) -> Self {
        Self { thresholds }
    }

    /// Checks one report against every threshold
    ///
    /// # Arguments
    /// * `label` - Name shown in the warnings (usually the file name)
    /// * `text` - Full report text
    ///
    /// # Returns
    /// One warning per exceeded threshold, empty when the report is within limits
    pub fn evaluate(&self, label: &str, text: &str) -> Vec<String> {
        let mut warnings = Vec::new();

        let bytes = text.len() as u64;
        if bytes > self.thresholds.max_bytes {
            warnings.push(format!(
                "{} is large: {} bytes (threshold {} bytes)",
                label, bytes, self.thresholds.max_bytes
            ));
        }

        let lines = split_lines(text).len();
        if lines > self.thresholds.max_lines {
            warnings.push(format!(
                "{} is large: {} lines (threshold {} lines)",
                label, lines, self.thresholds.max_lines
            ));
        }

        let section = dependency_section(text).len();
        if section > self.thresholds.max_dependency_section_lines {
            warnings.push(format!(
                "{} has a large dependency section: {} lines (threshold {} lines)",
                label, section, self.thresholds.max_dependency_section_lines
            ));
        }

        warnings
    }

    pub fn thresholds(&self) -> &InputThresholds {
        &self.thresholds
    }
}

impl Default for InputSizePolicy {
    fn default() -> Self {
        Self::new(InputThresholds::default())
    }
}
