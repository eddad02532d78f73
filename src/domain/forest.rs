//! Task forest assembly
//!
//! Reorganizes the flat collection of fetched tasks into a forest: root tasks
//! own nested subtask lists, to arbitrary depth. Child ownership is resolved
//! deterministically in input order with first-claim-wins semantics, so the
//! result does not depend on fetch completion timing.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

use super::id::IssueId;
use super::task::{FetchedTask, Subtask, SubtaskNode, Task};

/// The assembled forest: root tasks in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    roots: Vec<Task>,
}

impl Forest {
    /// Returns the root tasks, in the order their records arrived
    pub fn roots(&self) -> &[Task] {
        &self.roots
    }

    /// Returns true if no task was fetched at all
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of tasks in the forest, roots plus all nested descendants
    pub fn task_count(&self) -> usize {
        fn count(task: &Task) -> usize {
            1 + task
                .subtasks
                .iter()
                .filter_map(Subtask::task)
                .map(count)
                .sum::<usize>()
        }

        self.roots.iter().map(count).sum()
    }
}

/// Assembles the flat fetch results into a forest.
///
/// Ownership rules, applied in input order:
/// - the first parent to list a child owns it; later claims are dropped
/// - a task listing itself as a child is ignored
/// - a claim that would close a cycle is dropped, keeping the child at
///   top level (the renderers recurse and must never loop)
///
/// A claimed child whose own fetch failed still appears in its parent's
/// subtask list, as an explicit [`SubtaskNode::Missing`] entry.
pub fn build_forest(fetched: Vec<FetchedTask>) -> Forest {
    let mut graph: DiGraph<IssueId, ()> = DiGraph::new();
    let mut nodes: HashMap<IssueId, NodeIndex> = HashMap::new();
    let mut owners: HashMap<IssueId, IssueId> = HashMap::new();

    for task in &fetched {
        for child in &task.child_ids {
            if child == &task.id {
                tracing::warn!(id = %task.id, "task lists itself as a subtask, ignoring");
                continue;
            }
            if let Some(owner) = owners.get(child) {
                tracing::warn!(
                    child = %child,
                    owner = %owner,
                    dropped = %task.id,
                    "subtask claimed by more than one parent, first claim wins"
                );
                continue;
            }

            let parent_idx = node_for(&mut graph, &mut nodes, &task.id);
            let child_idx = node_for(&mut graph, &mut nodes, child);
            let edge = graph.add_edge(parent_idx, child_idx, ());
            if is_cyclic_directed(&graph) {
                graph.remove_edge(edge);
                tracing::warn!(
                    parent = %task.id,
                    child = %child,
                    "subtask link would create a cycle, keeping child at top level"
                );
                continue;
            }

            owners.insert(child.clone(), task.id.clone());
        }
    }

    let by_id: HashMap<&IssueId, &FetchedTask> =
        fetched.iter().map(|task| (&task.id, task)).collect();

    let roots = fetched
        .iter()
        .filter(|task| !owners.contains_key(&task.id))
        .map(|task| attach(task, &by_id, &owners))
        .collect();

    Forest { roots }
}

fn node_for(
    graph: &mut DiGraph<IssueId, ()>,
    nodes: &mut HashMap<IssueId, NodeIndex>,
    id: &IssueId,
) -> NodeIndex {
    if let Some(idx) = nodes.get(id) {
        return *idx;
    }
    let idx = graph.add_node(id.clone());
    nodes.insert(id.clone(), idx);
    idx
}

/// Builds the tree node for one task, recursing into its owned children
fn attach(
    task: &FetchedTask,
    by_id: &HashMap<&IssueId, &FetchedTask>,
    owners: &HashMap<IssueId, IssueId>,
) -> Task {
    let mut subtasks = Vec::new();

    for child_id in &task.child_ids {
        // Skipped claims (duplicate, self, cycle) produce no entry at all.
        if owners.get(child_id) != Some(&task.id) {
            continue;
        }
        let node = match by_id.get(child_id) {
            Some(child) => SubtaskNode::Present(attach(child, by_id, owners)),
            None => SubtaskNode::Missing,
        };
        subtasks.push(Subtask {
            id: child_id.clone(),
            node,
        });
    }

    Task {
        id: task.id.clone(),
        assignee: task.assignee.clone(),
        summary: task.summary.clone(),
        subtasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched(id: &str, children: &[&str]) -> FetchedTask {
        FetchedTask::new(id, "Ada Lovelace", format!("work on {id}"))
            .with_children(children.iter().copied())
    }

    fn root_ids(forest: &Forest) -> Vec<&str> {
        forest.roots().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn unrelated_tasks_are_all_roots() {
        let forest = build_forest(vec![fetched("A", &[]), fetched("B", &[]), fetched("C", &[])]);

        assert_eq!(root_ids(&forest), vec!["A", "B", "C"]);
        assert_eq!(forest.task_count(), 3);
    }

    #[test]
    fn child_nests_under_parent() {
        let forest = build_forest(vec![fetched("A", &["B"]), fetched("B", &[])]);

        assert_eq!(root_ids(&forest), vec!["A"]);
        let a = &forest.roots()[0];
        assert_eq!(a.subtasks.len(), 1);
        assert_eq!(a.subtasks[0].id, IssueId::from("B"));
        assert!(a.subtasks[0].task().is_some());
    }

    #[test]
    fn nesting_is_unbounded() {
        let forest = build_forest(vec![
            fetched("R", &["S"]),
            fetched("S", &["T"]),
            fetched("T", &[]),
        ]);

        assert_eq!(root_ids(&forest), vec!["R"]);
        let s = forest.roots()[0].subtasks[0].task().unwrap();
        let t = s.subtasks[0].task().unwrap();
        assert_eq!(t.id, IssueId::from("T"));
        assert!(t.subtasks.is_empty());
        assert_eq!(forest.task_count(), 3);
    }

    #[test]
    fn missing_child_gets_explicit_marker() {
        // "X" was requested but its fetch failed: it is not in the flat set.
        let forest = build_forest(vec![fetched("A", &["X"])]);

        let a = &forest.roots()[0];
        assert_eq!(a.subtasks.len(), 1);
        assert_eq!(a.subtasks[0].id, IssueId::from("X"));
        assert_eq!(a.subtasks[0].node, SubtaskNode::Missing);
        assert_eq!(forest.task_count(), 1);
    }

    #[test]
    fn every_task_appears_exactly_once() {
        let forest = build_forest(vec![
            fetched("A", &["B", "C"]),
            fetched("B", &["D"]),
            fetched("C", &[]),
            fetched("D", &[]),
            fetched("E", &[]),
        ]);

        fn collect<'a>(task: &'a Task, out: &mut Vec<&'a str>) {
            out.push(task.id.as_str());
            for sub in task.subtasks.iter().filter_map(Subtask::task) {
                collect(sub, out);
            }
        }

        let mut seen = Vec::new();
        for root in forest.roots() {
            collect(root, &mut seen);
        }
        seen.sort_unstable();
        assert_eq!(seen, vec!["A", "B", "C", "D", "E"]);
        assert_eq!(forest.task_count(), 5);
    }

    #[test]
    fn first_claim_wins_on_duplicate_child() {
        let forest = build_forest(vec![
            fetched("A", &["C"]),
            fetched("B", &["C"]),
            fetched("C", &[]),
        ]);

        assert_eq!(root_ids(&forest), vec!["A", "B"]);
        let a = &forest.roots()[0];
        let b = &forest.roots()[1];
        assert_eq!(a.subtasks.len(), 1);
        assert_eq!(a.subtasks[0].id, IssueId::from("C"));
        assert!(b.subtasks.is_empty());
        assert_eq!(forest.task_count(), 3);
    }

    #[test]
    fn self_reference_is_ignored() {
        let forest = build_forest(vec![fetched("A", &["A"])]);

        assert_eq!(root_ids(&forest), vec!["A"]);
        assert!(forest.roots()[0].subtasks.is_empty());
    }

    #[test]
    fn cycle_breaks_at_the_later_link() {
        let forest = build_forest(vec![fetched("A", &["B"]), fetched("B", &["A"])]);

        // A claims B first; B's claim on A would close the loop and is dropped.
        assert_eq!(root_ids(&forest), vec!["A"]);
        let b = forest.roots()[0].subtasks[0].task().unwrap();
        assert_eq!(b.id, IssueId::from("B"));
        assert!(b.subtasks.is_empty());
        assert_eq!(forest.task_count(), 2);
    }

    #[test]
    fn assembly_is_deterministic_in_input_order() {
        let batch = vec![
            fetched("B", &["C"]),
            fetched("A", &["C"]),
            fetched("C", &[]),
        ];
        let first = build_forest(batch.clone());
        let second = build_forest(batch);

        assert_eq!(first, second);
        // B arrived first, so B owns C.
        assert_eq!(first.roots()[0].id, IssueId::from("B"));
        assert_eq!(first.roots()[0].subtasks[0].id, IssueId::from("C"));
    }

    #[test]
    fn empty_batch_builds_empty_forest() {
        let forest = build_forest(Vec::new());
        assert!(forest.is_empty());
        assert_eq!(forest.task_count(), 0);
    }
}
