use super::{DiffLine, DiffMarker, FlattenedDiff};
use serde::Serialize;

/// Result of one comparison, before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffReport {
    /// Marker-prefixed tree lines (full, only-changes and legacy strategies)
    Tree { lines: Vec<DiffLine> },
    /// Coordinate-level summary
    Flattened(FlattenedDiff),
}

/// Counts shown in the JSON output and used for `--exit-code`.
///
/// Tree reports count lines; a version change there is one removed plus
/// one added line, so `changed` stays 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub unchanged: usize,
}

impl DiffSummary {
    pub fn has_changes(&self) -> bool {
        self.added + self.removed + self.changed > 0
    }
}

impl DiffReport {
    pub fn summary(&self) -> DiffSummary {
        match self {
            DiffReport::Tree { lines } => {
                let count = |marker: DiffMarker| lines.iter().filter(|l| l.marker == marker).count();
                DiffSummary {
                    added: count(DiffMarker::Added),
                    removed: count(DiffMarker::Removed),
                    changed: 0,
                    unchanged: count(DiffMarker::Unchanged),
                }
            }
            DiffReport::Flattened(diff) => DiffSummary {
                added: diff.added_count(),
                removed: diff.removed.len(),
                changed: diff.changed.len(),
                unchanged: 0,
            },
        }
    }

    pub fn has_changes(&self) -> bool {
        self.summary().has_changes()
    }
}
