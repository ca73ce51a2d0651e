//! dep-tree-diff - compare Gradle dependency tree reports
//!
//! This library parses the indented tree printed by `gradle dependencies`,
//! matches dependencies across two reports by coordinate rather than by
//! position, and renders what was added, removed or changed.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_diff`): Parsing, tree building and the diff algorithms
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, console and output formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! let before = "+--- androidx.core:core:1.0.0 -> 1.9.0";
//! let after = "+--- androidx.core:core:1.0.0 -> 1.13.0";
//!
//! let diff = dep_tree_diff::diff_full(before, after).unwrap();
//! assert_eq!(
//!     diff,
//!     "-+--- androidx.core:core:1.0.0 -> 1.9.0\n++--- androidx.core:core:1.0.0 -> 1.13.0"
//! );
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_diff;
pub mod ports;
pub mod shared;

use dependency_diff::domain::{DiffStrategy, ParseOptions};
use dependency_diff::services::{DependencyDiffer, ReportRenderer};
use shared::Result;

fn diff_with(old_text: &str, new_text: &str, strategy: DiffStrategy) -> Result<String> {
    let report = DependencyDiffer::new(ParseOptions::default()).diff(old_text, new_text, strategy)?;
    Ok(ReportRenderer::render(&report))
}

/// Full tree diff in the new report's order; lines are prefixed with
/// ` `, `-` or `+`.
pub fn diff_full(old_text: &str, new_text: &str) -> Result<String> {
    diff_with(old_text, new_text, DiffStrategy::Full)
}

/// [`diff_full`] without the unchanged lines.
pub fn diff_only_changes(old_text: &str, new_text: &str) -> Result<String> {
    diff_with(old_text, new_text, DiffStrategy::OnlyChanges)
}

/// Added / Removed / Changed summary by resolved version per coordinate.
pub fn diff_flattened(old_text: &str, new_text: &str) -> Result<String> {
    diff_with(old_text, new_text, DiffStrategy::Flattened)
}

/// Tree diff rebuilt from differing root-to-node paths, siblings sorted by
/// coordinate.
pub fn diff_legacy_path_set(old_text: &str, new_text: &str) -> Result<String> {
    diff_with(old_text, new_text, DiffStrategy::LegacyPathSet)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::application::dto::{DiffRequest, DiffResponse, OutputFormat};
    pub use crate::application::use_cases::CompareReportsUseCase;
    pub use crate::dependency_diff::domain::{
        DiffLine, DiffMarker, DiffReport, DiffStrategy, DiffSummary, FlattenedDiff, ParseMode,
        ParseOptions,
    };
    pub use crate::dependency_diff::policies::{InputSizePolicy, InputThresholds};
    pub use crate::dependency_diff::services::{DependencyDiffer, ReportRenderer};
    pub use crate::ports::inbound::DependencyDiffPort;
    pub use crate::ports::outbound::{DiffFormatter, OutputPresenter, ProgressReporter, ReportReader};
    pub use crate::shared::Result;
    pub use crate::{diff_flattened, diff_full, diff_legacy_path_set, diff_only_changes};
}
