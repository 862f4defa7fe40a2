//! Works out the shape of the scripts in a target from the `next`/`parent`
//! pointers stored on each block.

use crate::prelude::*;
use crate::sb3::{Block, Target};
use tracing::warn;

/// A pointer that doesn't resolve within its own target. The edge is dropped,
/// and everything else is still indexed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphProblem {
    DanglingNext { block: Box<str>, next: Box<str> },
    DanglingParent { block: Box<str>, parent: Box<str> },
    /// `block` is on a loop of pointers that no script starts from; it is
    /// rendered as a script of its own
    Cycle { block: Box<str> },
}

impl fmt::Display for GraphProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphProblem::DanglingNext { block, next } => {
                write!(f, "block {block} has next {next}, which doesn't exist")
            }
            GraphProblem::DanglingParent { block, parent } => {
                write!(f, "block {block} has parent {parent}, which doesn't exist")
            }
            GraphProblem::Cycle { block } => {
                write!(f, "block {block} is on a loop that no script starts from")
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockIndex {
    roots: Vec<Box<str>>,
    next: BTreeMap<Box<str>, Box<str>>,
    children: BTreeMap<Box<str>, BTreeSet<Box<str>>>,
    problems: Vec<GraphProblem>,
}

impl BlockIndex {
    pub fn new(target: &Target) -> Self {
        // id -> is it still a root candidate?
        let mut nodes: BTreeMap<&str, bool> = BTreeMap::new();
        let mut next = BTreeMap::new();
        let mut children: BTreeMap<Box<str>, BTreeSet<Box<str>>> = BTreeMap::new();
        let mut problems = vec![];

        for (id, block) in &target.blocks {
            let block = match block {
                Block::Object(block) => block,
                // loose reporters on the canvas
                Block::Literal(_) => {
                    nodes.entry(&**id).or_insert(true);
                    continue;
                }
            };
            if let Some(next_id) = &block.next {
                if target.blocks.contains_key(next_id) {
                    next.insert(id.clone(), next_id.clone());
                    nodes.insert(&**next_id, false);
                } else {
                    warn!(
                        sprite = %target.name,
                        block = %id,
                        next = %next_id,
                        "dropping dangling next pointer"
                    );
                    problems.push(GraphProblem::DanglingNext {
                        block: id.clone(),
                        next: next_id.clone(),
                    });
                }
            }
            let parent = match &block.parent {
                Some(parent) if target.blocks.contains_key(parent) => Some(parent),
                Some(parent) => {
                    warn!(
                        sprite = %target.name,
                        block = %id,
                        parent = %parent,
                        "dropping dangling parent pointer"
                    );
                    problems.push(GraphProblem::DanglingParent {
                        block: id.clone(),
                        parent: parent.clone(),
                    });
                    None
                }
                None => None,
            };
            match parent {
                Some(parent) => {
                    children.entry(parent.clone()).or_default().insert(id.clone());
                }
                None => {
                    nodes.entry(&**id).or_insert(true);
                }
            }
        }

        let mut roots: Vec<&str> = nodes
            .into_iter()
            .filter(|(_, is_root)| *is_root)
            .map(|(id, _)| id)
            .collect();

        // Blocks on a closed loop of next/parent pointers are all somebody's
        // next or child, so none of them made it in as a root. Start a script
        // at the first such block, preferring ones without a parent.
        let mut seen = BTreeSet::new();
        for &root in &roots {
            walk(root, &next, &children, &mut seen);
        }
        loop {
            let mut unseen = target
                .blocks
                .keys()
                .map(|id| &**id)
                .filter(|id| !seen.contains(id))
                .peekable();
            let Some(&first) = unseen.peek() else {
                break;
            };
            let orphan = unseen
                .find(|id| !children_of_someone(id, target))
                .unwrap_or(first);
            warn!(
                sprite = %target.name,
                block = %orphan,
                "script has no start, cutting its loop"
            );
            problems.push(GraphProblem::Cycle {
                block: orphan.into(),
            });
            walk(orphan, &next, &children, &mut seen);
            roots.push(orphan);
        }
        roots.sort_unstable();

        BlockIndex {
            roots: roots.into_iter().map(Box::from).collect(),
            next,
            children,
            problems,
        }
    }

    /// the first block of every script, sorted by id
    pub fn roots(&self) -> &[Box<str>] {
        &self.roots
    }

    pub fn next(&self, id: &str) -> Option<&str> {
        self.next.get(id).map(|next| &**next)
    }

    /// every block whose (resolved) parent is `id`: the next block, substack
    /// heads and blocks plugged into inputs
    pub fn children(&self, id: &str) -> impl Iterator<Item = &str> {
        self.children
            .get(id)
            .into_iter()
            .flat_map(|children| children.iter().map(|child| &**child))
    }

    pub fn problems(&self) -> &[GraphProblem] {
        &self.problems
    }

    /// every block that can be reached from a root by following next and child links
    pub fn reachable(&self) -> BTreeSet<&str> {
        let mut seen = BTreeSet::new();
        for root in &self.roots {
            walk(root, &self.next, &self.children, &mut seen);
        }
        seen
    }
}

/// `true` if `id` names a parent that resolves
fn children_of_someone(id: &str, target: &Target) -> bool {
    target
        .block_object(id)
        .and_then(|block| block.parent.as_ref())
        .is_some_and(|parent| target.blocks.contains_key(parent))
}

/// adds `start` and everything after or under it to `seen`
fn walk<'a>(
    start: &'a str,
    next: &'a BTreeMap<Box<str>, Box<str>>,
    children: &'a BTreeMap<Box<str>, BTreeSet<Box<str>>>,
    seen: &mut BTreeSet<&'a str>,
) {
    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        stack.extend(next.get(id).map(|next| &**next));
        stack.extend(children.get(id).into_iter().flatten().map(|child| &**child));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sb3::Project;

    fn ids(ids: &[&str]) -> Vec<Box<str>> {
        ids.iter().map(|&id| Box::from(id)).collect()
    }

    fn target(blocks: &str) -> DumpResult<Target> {
        let project = Project::try_from(format!(
            r#"{{"targets": [{{"name": "Stage", "isStage": true, "blocks": {blocks}}}]}}"#
        ))?;
        project
            .targets
            .into_iter()
            .next()
            .ok_or(make_dump_bug!("no target"))
    }

    #[test]
    fn roots_are_sorted_and_exclude_next_targets() -> DumpResult<()> {
        let target = target(
            r#"{
                "z": {"opcode": "flipperevents_whenProgramStarts", "next": "a", "topLevel": true},
                "a": {"opcode": "flippersensors_resetYaw", "parent": "z"},
                "m": {"opcode": "flippersensors_resetYaw", "topLevel": true},
                "k": {"opcode": "flippermove_stopMove", "next": "m2", "topLevel": true},
                "m2": {"opcode": "flippermove_stopMove"}
            }"#,
        )?;
        let index = BlockIndex::new(&target);
        // m2 has no parent but is pointed at by k's next
        assert_eq!(index.roots(), ids(&["k", "m", "z"]));
        assert_eq!(index.next("z"), Some("a"));
        assert_eq!(index.children("z").collect::<Vec<_>>(), ["a"]);
        assert!(index.problems().is_empty());
        Ok(())
    }

    #[test]
    fn next_target_is_not_a_root_whatever_the_scan_order() -> DumpResult<()> {
        // "a" is scanned before "b", whose next points back at "a"
        let target = target(
            r#"{
                "a": {"opcode": "flippermove_stopMove"},
                "b": {"opcode": "flippermove_stopMove", "next": "a", "topLevel": true}
            }"#,
        )?;
        assert_eq!(BlockIndex::new(&target).roots(), ids(&["b"]));
        Ok(())
    }

    #[test]
    fn dangling_edges_are_reported_and_dropped() -> DumpResult<()> {
        let target = target(
            r#"{
                "a": {"opcode": "flipperevents_whenProgramStarts", "next": "gone",
                      "topLevel": true},
                "b": {"opcode": "flippermove_stopMove", "parent": "missing"}
            }"#,
        )?;
        let index = BlockIndex::new(&target);
        assert_eq!(index.next("a"), None);
        assert_eq!(index.roots(), ids(&["a", "b"]));
        assert_eq!(
            index.problems(),
            [
                GraphProblem::DanglingNext {
                    block: "a".into(),
                    next: "gone".into()
                },
                GraphProblem::DanglingParent {
                    block: "b".into(),
                    parent: "missing".into()
                },
            ]
        );
        Ok(())
    }

    #[test]
    fn every_block_is_reachable_from_a_root() -> DumpResult<()> {
        let target = target(
            r#"{
                "hat": {"opcode": "flipperevents_whenProgramStarts", "next": "loop",
                        "topLevel": true},
                "loop": {"opcode": "control_forever", "parent": "hat", "next": null,
                         "inputs": {"SUBSTACK": [2, "body"]}},
                "body": {"opcode": "flippermove_startSteer", "parent": "loop",
                         "inputs": {"STEERING": [3, "op", [4, "0"]]}},
                "op": {"opcode": "operator_subtract", "parent": "body",
                       "inputs": {"NUM1": [1, [4, "1"]], "NUM2": [1, [4, "2"]]}},
                "loose": [12, "score", "v1", 10, 10]
            }"#,
        )?;
        let index = BlockIndex::new(&target);
        let reachable = index.reachable();
        let all = target
            .blocks
            .keys()
            .map(|id| &**id)
            .collect::<BTreeSet<_>>();
        assert_eq!(reachable, all);
        assert_eq!(index.roots(), ids(&["hat", "loose"]));
        Ok(())
    }

    #[test]
    fn loop_back_to_the_first_block_still_gets_a_root() -> DumpResult<()> {
        let target = target(
            r#"{
                "a": {"opcode": "flippermove_stopMove", "next": "b", "topLevel": true},
                "b": {"opcode": "flippermove_stopMove", "parent": "a", "next": "a"}
            }"#,
        )?;
        let index = BlockIndex::new(&target);
        assert_eq!(index.roots(), ids(&["a"]));
        assert_eq!(index.problems(), [GraphProblem::Cycle { block: "a".into() }]);
        assert_eq!(index.reachable().len(), 2);
        Ok(())
    }

    #[test]
    fn loop_where_everyone_has_a_parent_starts_at_the_smallest_id() -> DumpResult<()> {
        let target = target(
            r#"{
                "ok": {"opcode": "flippermove_stopMove", "topLevel": true},
                "y": {"opcode": "flippermove_stopMove", "parent": "x", "next": "x"},
                "x": {"opcode": "flippermove_stopMove", "parent": "y", "next": "y"}
            }"#,
        )?;
        let index = BlockIndex::new(&target);
        assert_eq!(index.roots(), ids(&["ok", "x"]));
        assert_eq!(index.problems(), [GraphProblem::Cycle { block: "x".into() }]);
        Ok(())
    }
}
