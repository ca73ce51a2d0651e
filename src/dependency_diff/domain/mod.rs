pub mod coordinate;
pub mod dependency_line;
pub mod diff_line;
pub mod diff_report;
pub mod diff_strategy;
pub mod flattened_diff;
pub mod parse_options;
pub mod resolved_map;
pub mod tree_node;

pub use coordinate::Coordinate;
pub use dependency_line::DependencyLine;
pub use diff_line::{DiffLine, DiffMarker};
pub use diff_report::{DiffReport, DiffSummary};
pub use diff_strategy::DiffStrategy;
pub use flattened_diff::{ChangedEntry, FlattenedDiff, ModuleEntry, VersionedEntry};
pub use parse_options::{ParseMode, ParseOptions, DEFAULT_INDENT_UNIT};
pub use resolved_map::{ResolvedMap, PROJECT_VERSION};
pub use tree_node::{DependencyPath, Forest, TreeNode};
