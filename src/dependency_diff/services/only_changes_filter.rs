use crate::dependency_diff::domain::{DiffLine, DiffMarker};
use crate::dependency_diff::services::line_parser::split_lines;

/// Drops unchanged lines from a full tree diff, leaving the rest untouched.
pub struct OnlyChangesFilter;

impl OnlyChangesFilter {
    pub fn filter_lines(lines: Vec<DiffLine>) -> Vec<DiffLine> {
        lines.into_iter().filter(|line| line.marker.is_change()).collect()
    }

    /// Text form: removes every line that starts with the unchanged marker.
    /// Indentation of the remaining lines is kept as is.
    pub fn filter_text(report: &str) -> String {
        let unchanged = DiffMarker::Unchanged.symbol();
        split_lines(report)
            .into_iter()
            .filter(|line| !line.is_empty() && !line.starts_with(unchanged))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = " +--- project :app\n |    \\--- a:a:1.0\n-|         +--- leaf:one:1.0\n+|         +--- leaf:one:1.1\n \\--- z:z:1.0";

    #[test]
    fn test_filter_text_keeps_changes_with_indentation() {
        assert_eq!(
            OnlyChangesFilter::filter_text(REPORT),
            "-|         +--- leaf:one:1.0\n+|         +--- leaf:one:1.1"
        );
    }

    #[test]
    fn test_filter_text_of_unchanged_report_is_empty() {
        assert_eq!(OnlyChangesFilter::filter_text(" +--- a:a:1.0\n \\--- b:b:1.0"), "");
        assert_eq!(OnlyChangesFilter::filter_text(""), "");
    }

    #[test]
    fn test_filter_lines_matches_filter_text() {
        let lines = vec![
            DiffLine::unchanged("+--- a:a:1.0"),
            DiffLine::removed("\\--- b:b:1.0"),
            DiffLine::added("\\--- b:b:2.0"),
        ];
        let text: Vec<String> = lines.iter().map(ToString::to_string).collect();
        let filtered = OnlyChangesFilter::filter_lines(lines);
        assert_eq!(filtered.len(), 2);
        let rendered: Vec<String> = filtered.iter().map(ToString::to_string).collect();
        assert_eq!(rendered.join("\n"), OnlyChangesFilter::filter_text(&text.join("\n")));
    }
}
