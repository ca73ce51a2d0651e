use super::DependencyLine;

/// One node of a parsed dependency forest.
///
/// Children keep their order of appearance in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub line: DependencyLine,
    pub children: Vec<TreeNode>,
}

/// Ordered list of root nodes.
pub type Forest = Vec<TreeNode>;

/// Root-to-node chain of raw `coordinate:version` tokens (path-set model).
pub type DependencyPath = Vec<String>;

impl TreeNode {
    pub fn new(line: DependencyLine) -> Self {
        Self {
            line,
            children: Vec::new(),
        }
    }

    pub fn identity(&self) -> &str {
        self.line.identity()
    }

    pub fn version(&self) -> &str {
        self.line.version()
    }

    pub fn raw(&self) -> &str {
        &self.line.raw
    }

    pub fn is_project(&self) -> bool {
        self.line.is_project()
    }

    pub fn same_release(&self, other: &TreeNode) -> bool {
        self.line.coordinate.same_release(&other.line.coordinate)
    }

    /// Number of nodes in this subtree, the node itself included.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(TreeNode::subtree_size).sum::<usize>()
    }

    /// Pre-order walk of the descendants with their depth relative to `self`
    /// (direct children are at 1).
    pub fn visit_descendants<F>(&self, visit: &mut F)
    where
        F: FnMut(usize, &TreeNode),
    {
        self.visit_from(1, visit);
    }

    fn visit_from<F>(&self, depth: usize, visit: &mut F)
    where
        F: FnMut(usize, &TreeNode),
    {
        for child in &self.children {
            visit(depth, child);
            child.visit_from(depth + 1, visit);
        }
    }

    /// First node (pre-order) in `forest` whose identity matches.
    pub fn find_first<'a>(forest: &'a [TreeNode], identity: &str) -> Option<&'a TreeNode> {
        for node in forest {
            if node.identity() == identity {
                return Some(node);
            }
            if let Some(found) = Self::find_first(&node.children, identity) {
                return Some(found);
            }
        }
        None
    }
}
