//! Parsing, tree building and the diff algorithms.
pub mod dependency_differ;
pub mod flattened_differ;
pub mod line_parser;
pub mod noise_filter;
pub mod only_changes_filter;
pub mod path_set_differ;
pub mod report_renderer;
pub mod tree_builder;
pub mod tree_differ;

pub use dependency_differ::DependencyDiffer;
pub use flattened_differ::FlattenedDiffer;
pub use line_parser::{dependency_section, split_lines, LineParser};
pub use noise_filter::NoiseFilter;
pub use only_changes_filter::OnlyChangesFilter;
pub use path_set_differ::PathSetDiffer;
pub use report_renderer::ReportRenderer;
pub use tree_builder::TreeBuilder;
pub use tree_differ::TreeDiffer;
