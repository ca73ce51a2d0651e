use crate::dependency_diff::domain::{DependencyPath, DiffLine, DiffMarker, ParseOptions};
use crate::dependency_diff::services::line_parser::{dependency_section, locate_connector};
use crate::dependency_diff::services::LineParser;
use crate::shared::Result;
use std::collections::HashSet;

/// Node of the minimal trees rebuilt from differing paths.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PathNode {
    coordinate: String,
    version_info: String,
    children: Vec<PathNode>,
}

impl PathNode {
    fn new(token: &str) -> Self {
        let (coordinate, version_info) = token.rsplit_once(':').unwrap_or(("", token));
        Self {
            coordinate: coordinate.to_string(),
            version_info: version_info.to_string(),
            children: Vec::new(),
        }
    }

    fn label(&self) -> String {
        format!("{}:{}", self.coordinate, self.version_info)
    }
}

/// PathSetDiffer is the original path-based algorithm, kept as a selectable
/// alternative to [`super::TreeDiffer`].
///
/// Each report becomes the set of root-to-node paths of raw coordinate
/// tokens. Only the paths missing from the other side survive, are rebuilt
/// into two small trees, and merged level by level over siblings sorted by
/// coordinate. Unlike the full differ, output order is lexicographic and the
/// indentation is synthesized rather than copied from the source.
pub struct PathSetDiffer {
    parser: LineParser,
}

impl PathSetDiffer {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            parser: LineParser::new(options),
        }
    }

    /// Diffs the dependency sections of two reports by path
    ///
    /// # Arguments
    /// * `old_text` - Report text of the baseline
    /// * `new_text` - Report text to compare against it
    ///
    /// # Returns
    /// Marked lines with synthesized indentation; empty when both sides hold
    /// the same paths
    ///
    /// # Errors
    /// Strict mode only, returns `DiffError::MalformedLine` for:
    /// - A section line without a branch connector
    /// - A connector off the indentation grid
    /// - A library coordinate without a colon
    pub fn diff(&self, old_text: &str, new_text: &str) -> Result<Vec<DiffLine>> {
        let old_paths = self.find_paths(old_text)?;
        let new_paths = self.find_paths(new_text)?;

        let removed = Self::build_tree(&Self::paths_minus(&old_paths, &new_paths));
        let added = Self::build_tree(&Self::paths_minus(&new_paths, &old_paths));

        let mut out = Vec::new();
        Self::append_diff(&removed, &added, "", &mut out);
        log::debug!(
            "Path-set diff: {} old path(s), {} new path(s), {} line(s)",
            old_paths.len(),
            new_paths.len(),
            out.len()
        );
        Ok(out)
    }

    /// One path per branch end: recorded whenever the depth stops growing,
    /// and once more for the branch open at the end of the section.
    ///
    /// Section lines go through [`LineParser::parse_line`], so alignment and
    /// coordinate checks match the other strategies.
    fn find_paths(&self, text: &str) -> Result<Vec<DependencyPath>> {
        let mut paths = Vec::new();
        let mut stack: DependencyPath = Vec::new();

        for (line_number, line) in dependency_section(text) {
            if locate_connector(line).is_none() {
                self.parser.reject::<()>(
                    line_number,
                    line,
                    "unable to find a branch connector inside the dependency section".to_string(),
                )?;
                continue;
            }
            let Some(parsed) = self.parser.parse_line(line_number, line)? else {
                continue;
            };

            if stack.len() > parsed.depth {
                paths.push(stack.clone());
                stack.truncate(parsed.depth);
            }
            stack.push(parsed.content);
        }

        if !stack.is_empty() {
            paths.push(stack);
        }
        Ok(paths)
    }

    fn paths_minus(paths: &[DependencyPath], other: &[DependencyPath]) -> Vec<DependencyPath> {
        let other: HashSet<&DependencyPath> = other.iter().collect();
        let mut seen = HashSet::new();
        paths
            .iter()
            .filter(|path| !other.contains(path) && seen.insert(*path))
            .cloned()
            .collect()
    }

    /// Merges paths into a tree, sharing nodes whose coordinate and version
    /// match exactly at each level, then sorts every sibling list.
    fn build_tree(paths: &[DependencyPath]) -> Vec<PathNode> {
        let mut root: Vec<PathNode> = Vec::new();
        for path in paths {
            let mut nodes = &mut root;
            for token in path {
                let candidate = PathNode::new(token);
                let index = match nodes.iter().position(|n| {
                    n.coordinate == candidate.coordinate && n.version_info == candidate.version_info
                }) {
                    Some(index) => index,
                    None => {
                        nodes.push(candidate);
                        nodes.len() - 1
                    }
                };
                nodes = &mut nodes[index].children;
            }
        }
        Self::sort_siblings(&mut root);
        root
    }

    fn sort_siblings(nodes: &mut [PathNode]) {
        nodes.sort_by(|a, b| a.coordinate.cmp(&b.coordinate));
        for node in nodes.iter_mut() {
            Self::sort_siblings(&mut node.children);
        }
    }

    fn append_diff(old: &[PathNode], new: &[PathNode], indent: &str, out: &mut Vec<DiffLine>) {
        let (mut old_index, mut new_index) = (0, 0);

        while old_index < old.len() && new_index < new.len() {
            let old_node = &old[old_index];
            let new_node = &new[new_index];
            let old_last = old_index == old.len() - 1;
            let new_last = new_index == new.len() - 1;

            if old_node.coordinate == new_node.coordinate {
                if old_node.version_info == new_node.version_info {
                    let next = Self::append_node(
                        DiffMarker::Unchanged,
                        indent,
                        old_node,
                        old_last && new_last,
                        out,
                    );
                    Self::append_diff(&old_node.children, &new_node.children, &next, out);
                } else {
                    // identical subtrees under a version bump are not repeated
                    let children_changed = old_node.children != new_node.children;
                    let next = Self::append_node(DiffMarker::Removed, indent, old_node, old_last, out);
                    if children_changed {
                        Self::append_diff(&old_node.children, &[], &next, out);
                    }
                    let next = Self::append_node(DiffMarker::Added, indent, new_node, new_last, out);
                    if children_changed {
                        Self::append_diff(&[], &new_node.children, &next, out);
                    }
                }
                old_index += 1;
                new_index += 1;
            } else if old_node.coordinate < new_node.coordinate {
                Self::append_subtree(DiffMarker::Removed, old_node, indent, old_last, out);
                old_index += 1;
            } else {
                Self::append_subtree(DiffMarker::Added, new_node, indent, new_last, out);
                new_index += 1;
            }
        }

        for (index, node) in old.iter().enumerate().skip(old_index) {
            Self::append_subtree(DiffMarker::Removed, node, indent, index == old.len() - 1, out);
        }
        for (index, node) in new.iter().enumerate().skip(new_index) {
            Self::append_subtree(DiffMarker::Added, node, indent, index == new.len() - 1, out);
        }
    }

    fn append_subtree(
        marker: DiffMarker,
        node: &PathNode,
        indent: &str,
        last: bool,
        out: &mut Vec<DiffLine>,
    ) {
        let next = Self::append_node(marker, indent, node, last, out);
        match marker {
            DiffMarker::Removed => Self::append_diff(&node.children, &[], &next, out),
            _ => Self::append_diff(&[], &node.children, &next, out),
        }
    }

    /// Emits one line and returns the indentation for its children.
    fn append_node(
        marker: DiffMarker,
        indent: &str,
        node: &PathNode,
        last: bool,
        out: &mut Vec<DiffLine>,
    ) -> String {
        let connector = if last { '\\' } else { '+' };
        out.push(DiffLine::new(
            marker,
            format!("{}{}--- {}", indent, connector, node.label()),
        ));
        let carry = if last { ' ' } else { '|' };
        format!("{}{}    ", indent, carry)
    }
}
