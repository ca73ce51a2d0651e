use crate::dependency_diff::domain::{Coordinate, DependencyLine, ParseOptions};
use crate::shared::error::DiffError;
use crate::shared::Result;

/// Connector for a child that has more siblings below it.
pub const BRANCH_CONNECTOR: &str = "+--- ";

/// Connector for the last child of a parent.
pub const LAST_BRANCH_CONNECTOR: &str = "\\--- ";

/// Both connectors are five characters wide.
const CONNECTOR_WIDTH: usize = 5;

/// LineParser turns report text into depth-tagged [`DependencyLine`]s.
///
/// Only lines containing a branch connector are considered; everything else
/// (configuration headers, legends, blank lines) is ignored. A connector
/// found off the indentation grid, or a library coordinate without a colon,
/// is an error in strict mode and skipped in lenient mode.
pub struct LineParser {
    options: ParseOptions,
}

impl LineParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parses every tree line of `text`, in document order.
    ///
    /// # Arguments
    /// * `text` - Full report text, LF or CRLF line endings
    ///
    /// # Returns
    /// The depth-tagged tree lines; non-tree lines are ignored
    ///
    /// # Errors
    /// - Strict mode only: a connector off the indentation grid
    /// - Strict mode only: a library coordinate without a colon
    pub fn parse(&self, text: &str) -> Result<Vec<DependencyLine>> {
        let mut lines = Vec::new();
        for (index, raw) in split_lines(text).into_iter().enumerate() {
            if let Some(line) = self.parse_line(index + 1, raw)? {
                lines.push(line);
            }
        }
        log::debug!("Parsed {} dependency line(s)", lines.len());
        Ok(lines)
    }

    /// Parses one line. `Ok(None)` means "not a tree line" or "skipped".
    pub fn parse_line(&self, line_number: usize, raw: &str) -> Result<Option<DependencyLine>> {
        let Some(connector) = locate_connector(raw) else {
            return Ok(None);
        };

        let column = raw[..connector].chars().count();
        if column % self.options.indent_unit != 0 {
            return self.reject(
                line_number,
                raw,
                format!(
                    "connector starts at column {} which is not a multiple of the {}-column indentation unit",
                    column, self.options.indent_unit
                ),
            );
        }

        let split = connector + CONNECTOR_WIDTH;
        let content = &raw[split..];
        let coordinate = Coordinate::parse(content);
        if !coordinate.is_well_formed() {
            return self.reject(
                line_number,
                raw,
                "coordinate has no `group:artifact` separator".to_string(),
            );
        }

        Ok(Some(DependencyLine {
            line_number,
            raw: raw.to_string(),
            prefix: raw[..split].to_string(),
            content: content.to_string(),
            coordinate,
            depth: column / self.options.indent_unit,
        }))
    }

    /// Applies the parse mode to a malformed line.
    pub fn reject<T>(&self, line_number: usize, raw: &str, reason: String) -> Result<Option<T>> {
        if self.options.is_strict() {
            return Err(DiffError::MalformedLine {
                line_number,
                line: raw.to_string(),
                reason,
            }
            .into());
        }
        log::debug!("Skipping malformed line {}: {} ({})", line_number, raw, reason);
        Ok(None)
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }
}

/// Byte offset of the first branch connector in `raw`, if any.
pub fn locate_connector(raw: &str) -> Option<usize> {
    match (raw.find(BRANCH_CONNECTOR), raw.find(LAST_BRANCH_CONNECTOR)) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Splits on `\r\n`, `\n` or a lone `\r`. Empty input yields one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}

/// The dependency section: from the first line that starts a top-level
/// branch up to (not including) the next blank line. Lines are numbered
/// from 1 against the whole text.
pub fn dependency_section(text: &str) -> Vec<(usize, &str)> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .skip_while(|(_, line)| {
            !line.starts_with(BRANCH_CONNECTOR) && !line.starts_with(LAST_BRANCH_CONNECTOR.trim_end())
        })
        .take_while(|(_, line)| !line.is_empty())
        .map(|(index, line)| (index + 1, line))
        .collect()
}
