use crate::dependency_diff::domain::DependencyLine;
use std::collections::{HashMap, HashSet};

/// Release keys from the top-level root down to a line.
type LinePath = Vec<String>;

/// NoiseFilter removes lines that would show up as phantom changes.
///
/// Two rules, applied in order and preserving the order of what remains:
/// 1. A version-less library line is dropped when the same identity carries
///    a version anywhere in the document. Project lines are never dropped
///    by this rule.
/// 2. A top-level line whose `(identity, version)` was already seen at top
///    level is a restatement (another configuration repeating the same
///    root) and is dropped.
///
/// Lines printed under a restated root are merged into the first
/// occurrence's subtree: a line whose path from the root was already kept
/// is dropped, any other line is moved to the end of its parent's subtree
/// so it keeps its parent.
pub struct NoiseFilter;

impl NoiseFilter {
    pub fn filter(lines: Vec<DependencyLine>) -> Vec<DependencyLine> {
        let versioned: HashSet<String> = lines
            .iter()
            .filter(|line| !line.is_project() && !line.version().is_empty())
            .map(|line| line.identity().to_string())
            .collect();

        let before = lines.len();
        let mut blocks: Vec<Vec<(LinePath, DependencyLine)>> = Vec::new();
        let mut root_blocks: HashMap<String, usize> = HashMap::new();
        let mut current: Option<usize> = None;
        let mut restated = false;
        let mut path: LinePath = Vec::new();

        for line in lines {
            path.truncate(line.depth);
            path.push(line.release_key());

            if !line.is_project() && line.version().is_empty() && versioned.contains(line.identity())
            {
                continue;
            }

            if line.depth == 0 {
                if let Some(&index) = root_blocks.get(&line.release_key()) {
                    current = Some(index);
                    restated = true;
                    continue;
                }
                root_blocks.insert(line.release_key(), blocks.len());
                restated = false;
            }

            let index = match current {
                Some(index) if line.depth > 0 => index,
                _ => {
                    blocks.push(Vec::new());
                    restated = false;
                    blocks.len() - 1
                }
            };
            current = Some(index);

            let block = &mut blocks[index];
            if !restated {
                block.push((path.clone(), line));
                continue;
            }
            if block.iter().any(|(kept, _)| *kept == path) {
                continue;
            }
            let parent = &path[..path.len() - 1];
            let at = block
                .iter()
                .rposition(|(kept, _)| kept.starts_with(parent))
                .map_or(block.len(), |position| position + 1);
            block.insert(at, (path.clone(), line));
        }

        let kept: Vec<DependencyLine> = blocks
            .into_iter()
            .flatten()
            .map(|(_, line)| line)
            .collect();
        log::debug!("Noise filter kept {} of {} line(s)", kept.len(), before);
        kept
    }
}
