use crate::shared::error::DiffError;
use crate::shared::Result;

/// Width of one nesting level in `gradle dependencies` output.
pub const DEFAULT_INDENT_UNIT: usize = 5;

/// What to do with a line that has a connector but cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Fail the whole comparison, naming the offending line
    #[default]
    Strict,
    /// Skip the line
    Lenient,
}

/// Parse settings shared by every diff strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub mode: ParseMode,
    /// Columns per nesting level; a connector must start on a multiple of it
    pub indent_unit: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: ParseMode::default(),
            indent_unit: DEFAULT_INDENT_UNIT,
        }
    }
}

impl ParseOptions {
    pub fn new(mode: ParseMode, indent_unit: usize) -> Result<Self> {
        if indent_unit == 0 {
            return Err(DiffError::Validation {
                message: "indent unit must be at least 1 column".to_string(),
            }
            .into());
        }
        Ok(Self { mode, indent_unit })
    }

    pub fn lenient() -> Self {
        Self {
            mode: ParseMode::Lenient,
            ..Self::default()
        }
    }

    pub fn is_strict(&self) -> bool {
        self.mode == ParseMode::Strict
    }
}
