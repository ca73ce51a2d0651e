use serde::Serialize;

/// A key with the single version it resolved to on one side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionedEntry {
    pub key: String,
    pub version: String,
}

/// A key present on both sides with different resolved versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedEntry {
    pub key: String,
    pub before: String,
    pub after: String,
}

/// A dependency listed under a newly added module, nested for presentation.
///
/// `depth` is relative to the module line (direct children are 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleEntry {
    pub module: String,
    pub key: String,
    pub version: String,
    pub depth: usize,
}

/// Coordinate-level summary of two reports.
///
/// `added`, `removed` and `changed` are sorted by key and pairwise disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlattenedDiff {
    pub added: Vec<VersionedEntry>,
    pub removed: Vec<VersionedEntry>,
    pub changed: Vec<ChangedEntry>,
    pub module_additions: Vec<ModuleEntry>,
}

impl FlattenedDiff {
    /// Entries shown under `# Added`, module nesting included.
    pub fn added_count(&self) -> usize {
        self.added.len() + self.module_additions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
