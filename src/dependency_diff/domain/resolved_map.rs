use super::DependencyLine;
use std::collections::BTreeMap;

/// Version recorded for `project :x` entries, which have none of their own.
pub const PROJECT_VERSION: &str = "(project)";

/// Identity to resolved version, ignoring where in the tree it appeared.
///
/// Keys iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedMap {
    versions: BTreeMap<String, String>,
}

impl ResolvedMap {
    /// Builds the map in document order; the last occurrence of a key wins.
    /// Version-less library lines carry no resolution and are ignored.
    pub fn from_lines(lines: &[DependencyLine]) -> Self {
        let mut versions = BTreeMap::new();
        for line in lines {
            let version = if line.is_project() {
                PROJECT_VERSION
            } else if line.version().is_empty() {
                continue;
            } else {
                line.version()
            };
            versions.insert(line.identity().to_string(), version.to_string());
        }
        Self { versions }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.versions.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.versions.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
