use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::{DiffStrategy, OutputFormat};

/// When to colorize text output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "Invalid color choice: {}. Please specify 'auto', 'always' or 'never'",
                s
            )),
        }
    }
}

impl ColorChoice {
    /// Resolves `Auto` against the output target.
    pub fn enabled(self, writing_to_terminal: bool, no_color_env: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => writing_to_terminal && !no_color_env,
        }
    }
}

/// Compare two Gradle `dependencies` reports and show what changed
#[derive(Parser, Debug)]
#[command(name = "dep-tree-diff")]
#[command(version)]
#[command(
    about = "Compare two Gradle dependency tree reports",
    long_about = "Compare two `gradle dependencies` text reports and show added, removed and \
                  changed dependencies as a tree diff or a flattened summary."
)]
pub struct Args {
    /// Report of the baseline build
    #[arg(value_name = "BEFORE")]
    pub before: PathBuf,

    /// Report of the build to check
    #[arg(value_name = "AFTER")]
    pub after: PathBuf,

    /// Diff mode: full, only-changes, flattened or legacy [default: full]
    #[arg(short, long)]
    pub mode: Option<DiffStrategy>,

    /// Output format: text, markdown or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail on malformed tree lines (default)
    #[arg(long, conflicts_with = "lenient")]
    pub strict: bool,

    /// Skip malformed tree lines instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Columns per nesting level in the reports [default: 5]
    #[arg(long, value_name = "N")]
    pub indent_unit: Option<usize>,

    /// Exit with status 1 when differences are found
    #[arg(long)]
    pub exit_code: bool,

    /// Colorize text output: auto, always or never
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Path to a config file (defaults to ./dep-tree-diff.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// `Some(true)` for --strict, `Some(false)` for --lenient, `None` when
    /// neither was given.
    pub fn strict_override(&self) -> Option<bool> {
        match (self.strict, self.lenient) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
