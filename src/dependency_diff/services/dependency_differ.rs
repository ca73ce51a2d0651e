use crate::dependency_diff::domain::{DiffLine, DiffReport, DiffStrategy, Forest, ParseOptions};
use crate::dependency_diff::services::{
    FlattenedDiffer, LineParser, NoiseFilter, OnlyChangesFilter, PathSetDiffer, TreeBuilder,
    TreeDiffer,
};
use crate::shared::Result;

/// DependencyDiffer runs one comparison with the chosen strategy.
///
/// All strategies share the same [`ParseOptions`], so a malformed line is
/// treated identically whichever algorithm is selected. The differ holds no
/// state between calls.
pub struct DependencyDiffer {
    options: ParseOptions,
}

impl DependencyDiffer {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Compares two reports with one strategy
    ///
    /// # Arguments
    /// * `old_text` - Report text of the baseline
    /// * `new_text` - Report text to compare against it
    /// * `strategy` - Algorithm producing the report
    ///
    /// # Returns
    /// A tree report for the full, only-changes and legacy strategies, a
    /// flattened report otherwise
    ///
    /// # Errors
    /// Returns `DiffError::MalformedLine` in strict mode when either side has
    /// a line the parser rejects
    pub fn diff(&self, old_text: &str, new_text: &str, strategy: DiffStrategy) -> Result<DiffReport> {
        log::debug!("Comparing reports with the {} strategy", strategy);

        let report = match strategy {
            DiffStrategy::Full => DiffReport::Tree {
                lines: self.tree_diff(old_text, new_text)?,
            },
            DiffStrategy::OnlyChanges => DiffReport::Tree {
                lines: OnlyChangesFilter::filter_lines(self.tree_diff(old_text, new_text)?),
            },
            DiffStrategy::Flattened => {
                let parser = LineParser::new(self.options);
                let old_lines = parser.parse(old_text)?;
                let new_lines = parser.parse(new_text)?;
                let new_forest = TreeBuilder::build(NoiseFilter::filter(new_lines.clone()));
                DiffReport::Flattened(FlattenedDiffer::diff(&old_lines, &new_lines, &new_forest))
            }
            DiffStrategy::LegacyPathSet => DiffReport::Tree {
                lines: PathSetDiffer::new(self.options).diff(old_text, new_text)?,
            },
        };
        Ok(report)
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    fn tree_diff(&self, old_text: &str, new_text: &str) -> Result<Vec<DiffLine>> {
        let old_forest = self.forest(old_text)?;
        let new_forest = self.forest(new_text)?;
        Ok(TreeDiffer::diff(&old_forest, &new_forest))
    }

    /// Parse, filter and build: the pipeline every tree strategy starts with.
    pub fn forest(&self, text: &str) -> Result<Forest> {
        let lines = LineParser::new(self.options).parse(text)?;
        let filtered = NoiseFilter::filter(lines);
        Ok(TreeBuilder::build(filtered))
    }
}

impl Default for DependencyDiffer {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}
