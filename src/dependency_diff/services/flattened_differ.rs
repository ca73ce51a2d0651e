use crate::dependency_diff::domain::{
    ChangedEntry, DependencyLine, FlattenedDiff, ModuleEntry, ResolvedMap, TreeNode,
    VersionedEntry,
};
use std::collections::HashSet;

/// FlattenedDiffer compares two reports by resolved version per key,
/// ignoring tree structure.
pub struct FlattenedDiffer;

impl FlattenedDiffer {
    /// Compares resolved versions per key
    ///
    /// # Arguments
    /// * `old_lines` - Parsed lines of the baseline
    /// * `new_lines` - Parsed lines of the report to compare
    /// * `new_forest` - Noise-filtered forest of the new side, used to list
    ///   what a newly added module brings in
    ///
    /// # Returns
    /// Added, removed and changed keys sorted by key, plus module additions
    pub fn diff(
        old_lines: &[DependencyLine],
        new_lines: &[DependencyLine],
        new_forest: &[TreeNode],
    ) -> FlattenedDiff {
        let before = ResolvedMap::from_lines(old_lines);
        let after = ResolvedMap::from_lines(new_lines);

        let mut diff = Self::compare_maps(&before, &after);
        diff.module_additions = Self::module_additions(&diff, new_forest);

        log::debug!(
            "Flattened diff: {} added ({} under new modules), {} removed, {} changed",
            diff.added.len(),
            diff.module_additions.len(),
            diff.removed.len(),
            diff.changed.len()
        );
        diff
    }

    /// Added, removed and changed keys. BTreeMap iteration keeps each list
    /// sorted by key.
    pub fn compare_maps(before: &ResolvedMap, after: &ResolvedMap) -> FlattenedDiff {
        let mut diff = FlattenedDiff::default();

        for (key, version) in after.iter() {
            if !before.contains_key(key) {
                diff.added.push(VersionedEntry {
                    key: key.to_string(),
                    version: version.to_string(),
                });
            }
        }

        for (key, version) in before.iter() {
            match after.get(key) {
                None => diff.removed.push(VersionedEntry {
                    key: key.to_string(),
                    version: version.to_string(),
                }),
                Some(next) if next != version => diff.changed.push(ChangedEntry {
                    key: key.to_string(),
                    before: version.to_string(),
                    after: next.to_string(),
                }),
                Some(_) => {}
            }
        }

        diff
    }

    /// Library keys found under each added `project :` module that are not
    /// already reported as added, with their depth below the module. Changed
    /// and unchanged keys are listed. Repeats within one module are listed
    /// once.
    fn module_additions(diff: &FlattenedDiff, new_forest: &[TreeNode]) -> Vec<ModuleEntry> {
        let reported: HashSet<&str> = diff.added.iter().map(|entry| entry.key.as_str()).collect();

        let mut entries = Vec::new();
        for module in diff.added.iter().filter(|entry| is_module_key(&entry.key)) {
            let Some(node) = TreeNode::find_first(new_forest, &module.key) else {
                continue;
            };

            let mut seen = HashSet::new();
            node.visit_descendants(&mut |depth, child| {
                let key = child.identity();
                if child.is_project()
                    || child.version().is_empty()
                    || reported.contains(key)
                    || !seen.insert(key.to_string())
                {
                    return;
                }
                entries.push(ModuleEntry {
                    module: module.key.clone(),
                    key: key.to_string(),
                    version: child.version().to_string(),
                    depth,
                });
            });
        }
        entries
    }
}

fn is_module_key(key: &str) -> bool {
    key.starts_with("project :")
}
