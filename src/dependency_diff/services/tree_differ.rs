use crate::dependency_diff::domain::{DiffLine, DiffMarker, TreeNode};

/// TreeDiffer merges two forests sibling list by sibling list.
///
/// New children drive the walk in their own order. Each one claims an
/// unconsumed old sibling with the same identity, preferring an exact
/// version match:
/// - same version: unchanged line, children compared recursively
/// - other version: the old line removed, the new line added, children
///   compared recursively
/// - no match: the whole new subtree is added
///
/// Old siblings left unclaimed follow as removed subtrees, in old order.
/// Matching is by identity and version only, so moving a dependency among
/// its siblings is not a change. Every emitted line is a verbatim source line.
pub struct TreeDiffer;

impl TreeDiffer {
    pub fn diff(old: &[TreeNode], new: &[TreeNode]) -> Vec<DiffLine> {
        let mut out = Vec::new();
        Self::diff_siblings(old, new, &mut out);
        log::debug!("Full tree diff produced {} line(s)", out.len());
        out
    }

    fn diff_siblings(old: &[TreeNode], new: &[TreeNode], out: &mut Vec<DiffLine>) {
        let mut consumed = vec![false; old.len()];

        for new_node in new {
            let exact = Self::claim(old, &consumed, |o| o.same_release(new_node));
            let matched = exact.or_else(|| {
                Self::claim(old, &consumed, |o| o.identity() == new_node.identity())
            });

            match matched {
                Some(index) => {
                    consumed[index] = true;
                    let old_node = &old[index];
                    if exact.is_some() {
                        out.push(DiffLine::unchanged(new_node.raw()));
                    } else {
                        out.push(DiffLine::removed(old_node.raw()));
                        out.push(DiffLine::added(new_node.raw()));
                    }
                    Self::diff_siblings(&old_node.children, &new_node.children, out);
                }
                None => Self::emit_subtree(new_node, DiffMarker::Added, out),
            }
        }

        for (old_node, _) in old.iter().zip(&consumed).filter(|(_, used)| !**used) {
            Self::emit_subtree(old_node, DiffMarker::Removed, out);
        }
    }

    fn claim<F>(old: &[TreeNode], consumed: &[bool], matches: F) -> Option<usize>
    where
        F: Fn(&TreeNode) -> bool,
    {
        old.iter()
            .enumerate()
            .position(|(index, node)| !consumed[index] && matches(node))
    }

    fn emit_subtree(node: &TreeNode, marker: DiffMarker, out: &mut Vec<DiffLine>) {
        out.push(DiffLine::new(marker, node.raw()));
        for child in &node.children {
            Self::emit_subtree(child, marker, out);
        }
    }
}
