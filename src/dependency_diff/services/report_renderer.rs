use crate::dependency_diff::domain::{DiffLine, DiffReport, FlattenedDiff};
use std::fmt::Write;

/// Column width of the key in the flattened report.
const KEY_WIDTH: usize = 55;

/// Column width of the "before" version in the Changed section.
const VERSION_WIDTH: usize = 16;

const FLATTENED_BANNER: &str = "=== Dependency Diff (flattened by resolved coordinates) ===";

/// ReportRenderer produces the plain-text form of a [`DiffReport`].
///
/// Output adapters (colors, markdown fences, JSON) build on this text or on
/// the report itself.
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn render(report: &DiffReport) -> String {
        match report {
            DiffReport::Tree { lines } => Self::render_tree(lines),
            DiffReport::Flattened(diff) => Self::render_flattened(diff),
        }
    }

    /// One line per entry, no trailing newline.
    pub fn render_tree(lines: &[DiffLine]) -> String {
        lines
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render_flattened(diff: &FlattenedDiff) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = Self::write_flattened(&mut out, diff);
        out
    }

    fn write_flattened(out: &mut String, diff: &FlattenedDiff) -> std::fmt::Result {
        writeln!(out, "{}", FLATTENED_BANNER)?;
        writeln!(out)?;

        writeln!(out, "# Added ({})", diff.added_count())?;
        if diff.added_count() == 0 {
            writeln!(out, "  (none)")?;
        }
        for entry in &diff.added {
            writeln!(out, "  + {} {}", pad(&entry.key, KEY_WIDTH), entry.version)?;
        }
        for entry in &diff.module_additions {
            let indent = format!("  {}", "  ".repeat(entry.depth));
            // nested keys give up the width their indentation takes
            let width = (KEY_WIDTH + 2).saturating_sub(indent.len());
            writeln!(out, "{}+ {} {}", indent, pad(&entry.key, width), entry.version)?;
        }
        writeln!(out)?;

        writeln!(out, "# Removed ({})", diff.removed.len())?;
        if diff.removed.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for entry in &diff.removed {
            writeln!(out, "  - {} {}", pad(&entry.key, KEY_WIDTH), entry.version)?;
        }
        writeln!(out)?;

        writeln!(out, "# Changed ({})", diff.changed.len())?;
        if diff.changed.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for entry in &diff.changed {
            writeln!(
                out,
                "  ~ {} {} -> {}",
                pad(&entry.key, KEY_WIDTH),
                pad(&entry.before, VERSION_WIDTH),
                entry.after
            )?;
        }
        Ok(())
    }
}

/// Left-aligns `text` in a column of `width` characters; longer text is
/// kept whole.
fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_diff::domain::{ChangedEntry, ModuleEntry, VersionedEntry};

    #[test]
    fn test_render_tree_joins_without_trailing_newline() {
        let report = DiffReport::Tree {
            lines: vec![
                DiffLine::removed("+--- a:a:1.0"),
                DiffLine::added("+--- a:a:2.0"),
            ],
        };
        assert_eq!(ReportRenderer::render(&report), "-+--- a:a:1.0\n++--- a:a:2.0");
    }

    #[test]
    fn test_render_empty_tree() {
        assert_eq!(ReportRenderer::render(&DiffReport::Tree { lines: vec![] }), "");
    }

    #[test]
    fn test_render_empty_flattened() {
        let text = ReportRenderer::render(&DiffReport::Flattened(FlattenedDiff::default()));
        assert_eq!(
            text,
            "=== Dependency Diff (flattened by resolved coordinates) ===\n\n\
             # Added (0)\n  (none)\n\n\
             # Removed (0)\n  (none)\n\n\
             # Changed (0)\n  (none)\n"
        );
    }

    #[test]
    fn test_render_flattened_columns() {
        let diff = FlattenedDiff {
            added: vec![VersionedEntry {
                key: "project :feature".to_string(),
                version: "(project)".to_string(),
            }],
            removed: vec![VersionedEntry {
                key: "com.example:library".to_string(),
                version: "1.0.0".to_string(),
            }],
            changed: vec![ChangedEntry {
                key: "androidx.core:core".to_string(),
                before: "1.9.0".to_string(),
                after: "1.13.0".to_string(),
            }],
            module_additions: vec![ModuleEntry {
                module: "project :feature".to_string(),
                key: "com.squareup.okio:okio".to_string(),
                version: "3.6.0".to_string(),
                depth: 1,
            }],
        };
        let text = ReportRenderer::render_flattened(&diff);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[2], "# Added (2)");
        assert_eq!(lines[3], format!("  + {:<55} (project)", "project :feature"));
        assert_eq!(lines[4], format!("    + {:<53} 3.6.0", "com.squareup.okio:okio"));
        assert_eq!(lines[7], format!("  - {:<55} 1.0.0", "com.example:library"));
        assert_eq!(
            lines[10],
            format!("  ~ {:<55} {:<16} -> 1.13.0", "androidx.core:core", "1.9.0")
        );
    }

    #[test]
    fn test_module_entries_keep_the_version_column_aligned() {
        let diff = FlattenedDiff {
            added: vec![VersionedEntry {
                key: "project :feature".to_string(),
                version: "(project)".to_string(),
            }],
            module_additions: vec![ModuleEntry {
                module: "project :feature".to_string(),
                key: "x:y".to_string(),
                version: "1.0".to_string(),
                depth: 3,
            }],
            ..Default::default()
        };
        let text = ReportRenderer::render_flattened(&diff);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3].find("(project)"), lines[4].find("1.0"));
    }

    #[test]
    fn test_pad_never_truncates() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("abcdef", 3), "abcdef");
    }
}
