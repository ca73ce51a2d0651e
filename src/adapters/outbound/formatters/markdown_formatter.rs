use crate::application::dto::DiffResponse;
use crate::dependency_diff::domain::DiffReport;
use crate::dependency_diff::services::ReportRenderer;
use crate::ports::outbound::DiffFormatter;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// Characters replaced in file names shown in the header
const UNSAFE_FILE_NAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// MarkdownFormatter adapter wrapping the report in a shareable document
///
/// Tree reports go in a ```` ```diff ```` fence so code hosts highlight the
/// markers; the flattened summary goes in a ```` ```text ```` fence.
pub struct MarkdownFormatter {
    generated_at: Option<DateTime<Utc>>,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self { generated_at: None }
    }

    /// Fixes the timestamp printed in the header.
    pub fn with_generated_at(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at: Some(generated_at),
        }
    }

    fn sanitize_file_name(name: &str) -> String {
        name.chars()
            .map(|c| if UNSAFE_FILE_NAME_CHARS.contains(&c) { '_' } else { c })
            .collect()
    }

    fn render_header(&self, output: &mut String, response: &DiffResponse) {
        let generated_at = self.generated_at.unwrap_or_else(Utc::now);
        let summary = response.summary;

        output.push_str("# Dependency Tree Diff\n\n");
        output.push_str(&format!("- Generated: {}\n", generated_at.to_rfc3339()));
        output.push_str(&format!("- Mode: {}\n", response.strategy));
        output.push_str(&format!(
            "- Files: `{}` ⇄ `{}`\n",
            Self::sanitize_file_name(&response.before),
            Self::sanitize_file_name(&response.after)
        ));
        output.push_str(&format!(
            "- Summary: {} added, {} removed, {} changed\n\n",
            summary.added, summary.removed, summary.changed
        ));
    }

    fn render_body(output: &mut String, report: &DiffReport) {
        let (language, body) = match report {
            DiffReport::Tree { lines } if lines.is_empty() => {
                output.push_str("_No differences._\n");
                return;
            }
            DiffReport::Tree { lines } => ("diff", ReportRenderer::render_tree(lines)),
            DiffReport::Flattened(diff) => ("text", ReportRenderer::render_flattened(diff)),
        };

        output.push_str(&format!("```{}\n", language));
        output.push_str(body.trim_end_matches('\n'));
        output.push_str("\n```\n");
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffFormatter for MarkdownFormatter {
    fn format(&self, response: &DiffResponse) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, response);
        Self::render_body(&mut output, &response.report);
        Ok(output)
    }
}
