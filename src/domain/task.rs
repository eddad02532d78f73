//! Task records
//!
//! Two shapes, one per lifecycle stage: [`FetchedTask`] is a flat record as
//! returned by the tracker (it knows its children only by ID), and [`Task`]
//! is a node in the assembled forest, holding its subtasks directly. The
//! `child_ids` list does not survive assembly; the `subtasks` container is
//! always present, possibly empty.

use super::id::IssueId;

/// A task as fetched from the tracker, before forest assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedTask {
    /// Issue key, unique and stable for the run
    pub id: IssueId,

    /// Assignee display name; a fetch without one is not a valid task
    pub assignee: String,

    /// Free-text summary
    pub summary: String,

    /// Subtask IDs, restricted to IDs that were part of the requested batch
    pub child_ids: Vec<IssueId>,
}

impl FetchedTask {
    /// Creates a task record with no children
    pub fn new(
        id: impl Into<IssueId>,
        assignee: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            assignee: assignee.into(),
            summary: summary.into(),
            child_ids: Vec::new(),
        }
    }

    /// Sets the subtask IDs
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<IssueId>,
    {
        self.child_ids = children.into_iter().map(Into::into).collect();
        self
    }
}

/// A task node in the assembled forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: IssueId,
    pub assignee: String,
    pub summary: String,

    /// Attached subtasks, in the order the parent listed them
    pub subtasks: Vec<Subtask>,
}

/// One entry in a task's subtask list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtask {
    /// The child ID, kept even when the child itself could not be fetched
    pub id: IssueId,
    pub node: SubtaskNode,
}

/// Whether a claimed child actually made it into the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtaskNode {
    /// The child was fetched and is nested here
    Present(Task),
    /// The parent listed this child but its own fetch failed
    Missing,
}

impl Subtask {
    /// Returns the nested task, if the child was fetched
    pub fn task(&self) -> Option<&Task> {
        match &self.node {
            SubtaskNode::Present(task) => Some(task),
            SubtaskNode::Missing => None,
        }
    }
}
