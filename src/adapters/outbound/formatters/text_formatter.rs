use crate::application::dto::DiffResponse;
use crate::dependency_diff::domain::{DiffLine, DiffMarker, DiffReport};
use crate::dependency_diff::services::ReportRenderer;
use crate::ports::outbound::DiffFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

/// TextFormatter adapter producing the plain report, optionally colorized
///
/// Without color the output is exactly the core report text.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint_tree(lines: &[DiffLine]) -> String {
        lines
            .iter()
            .map(|line| {
                let text = line.to_string();
                match line.marker {
                    DiffMarker::Added => text.green().to_string(),
                    DiffMarker::Removed => text.red().to_string(),
                    DiffMarker::Unchanged => text,
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Colors flattened lines by their entry symbol.
    fn paint_flattened(text: &str) -> String {
        text.lines()
            .map(|line| match line.trim_start().chars().next() {
                Some('+') => line.green().to_string(),
                Some('-') => line.red().to_string(),
                Some('~') => line.yellow().to_string(),
                Some('#') | Some('=') => line.bold().to_string(),
                _ => line.to_string(),
            })
            .map(|line| line + "\n")
            .collect()
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DiffFormatter for TextFormatter {
    fn format(&self, response: &DiffResponse) -> Result<String> {
        if !self.color {
            return Ok(ReportRenderer::render(&response.report));
        }
        Ok(match &response.report {
            DiffReport::Tree { lines } => Self::paint_tree(lines),
            DiffReport::Flattened(diff) => {
                Self::paint_flattened(&ReportRenderer::render_flattened(diff))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_diff::domain::{DiffStrategy, FlattenedDiff};

    fn response(report: DiffReport) -> DiffResponse {
        DiffResponse::new(
            DiffStrategy::Full,
            "before.txt".to_string(),
            "after.txt".to_string(),
            report,
        )
    }

    fn tree() -> DiffReport {
        DiffReport::Tree {
            lines: vec![
                DiffLine::unchanged("+--- a:a:1.0"),
                DiffLine::removed("\\--- b:b:1.0"),
                DiffLine::added("\\--- b:b:2.0"),
            ],
        }
    }

    #[test]
    fn test_plain_output_is_core_report() {
        let output = TextFormatter::new(false).format(&response(tree())).unwrap();
        assert_eq!(output, " +--- a:a:1.0\n-\\--- b:b:1.0\n+\\--- b:b:2.0");
    }

    #[test]
    fn test_colored_output_wraps_changes_only() {
        let output = TextFormatter::new(true).format(&response(tree())).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " +--- a:a:1.0");
        assert!(lines[1].starts_with("\u{1b}[31m"));
        assert!(lines[2].starts_with("\u{1b}[32m"));
        assert!(lines[2].contains("+\\--- b:b:2.0"));
    }

    #[test]
    fn test_colored_flattened_keeps_line_count() {
        let report = DiffReport::Flattened(FlattenedDiff::default());
        let plain = TextFormatter::new(false).format(&response(report.clone())).unwrap();
        let colored = TextFormatter::new(true).format(&response(report)).unwrap();
        assert_eq!(plain.lines().count(), colored.lines().count());
        assert!(colored.contains("\u{1b}[1m# Added (0)"));
    }
}
