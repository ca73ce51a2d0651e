use crate::dependency_diff::domain::{DependencyLine, Forest, TreeNode};

/// TreeBuilder nests a pre-ordered, depth-tagged line sequence into a forest.
///
/// A stack holds the child index of every open node. Each line first closes
/// the frames at or below its depth, then becomes a child of the frame on
/// top (or a new root when the stack is empty) and is opened itself. A jump
/// of more than one level is accepted and simply nests under the current
/// top. Out-of-order input produces a wrong forest without any error.
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn build(lines: Vec<DependencyLine>) -> Forest {
        let mut forest: Forest = Vec::new();
        let mut open: Vec<usize> = Vec::new();

        for line in lines {
            open.truncate(line.depth);
            let siblings = Self::children_at(&mut forest, &open);
            siblings.push(TreeNode::new(line));
            open.push(siblings.len() - 1);
        }

        forest
    }

    fn children_at<'a>(forest: &'a mut Forest, open: &[usize]) -> &'a mut Vec<TreeNode> {
        let mut nodes = forest;
        for &index in open {
            nodes = &mut nodes[index].children;
        }
        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_diff::domain::ParseOptions;
    use crate::dependency_diff::services::LineParser;

    fn build(text: &str) -> Forest {
        TreeBuilder::build(LineParser::new(ParseOptions::default()).parse(text).unwrap())
    }

    #[test]
    fn test_builds_nested_forest() {
        let forest = build(
            "\
+--- project :app
|    +--- a:a:1.0
|    |    \\--- b:b:1.0
|    \\--- c:c:1.0
\\--- d:d:1.0",
        );
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].identity(), "project :app");
        assert_eq!(forest[0].children.len(), 2);
        assert_eq!(forest[0].children[0].children[0].identity(), "b:b");
        assert_eq!(forest[0].children[1].identity(), "c:c");
        assert_eq!(forest[1].identity(), "d:d");
    }

    #[test]
    fn test_empty_input_builds_empty_forest() {
        assert!(TreeBuilder::build(Vec::new()).is_empty());
    }

    #[test]
    fn test_depth_jump_nests_under_current_top() {
        let forest = build("+--- a:a:1.0\n|         \\--- b:b:1.0\n\\--- c:c:1.0");
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].children[0].identity(), "b:b");
    }

    #[test]
    fn test_orphan_child_without_root_becomes_root() {
        let forest = build("     \\--- b:b:1.0");
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].identity(), "b:b");
    }

    #[test]
    fn test_preserves_sibling_order() {
        let forest = build("+--- z:z:1\n+--- a:a:1\n\\--- m:m:1");
        let order: Vec<&str> = forest.iter().map(|n| n.identity()).collect();
        assert_eq!(order, vec!["z:z", "a:a", "m:m"]);
    }
}
