//! Fetcher contract and batch collection
//!
//! The forest builder only needs one capability from the outside world:
//! `fetch(id) -> outcome`. The batch join is wait-all, never fail-fast: the
//! input lists routinely contain stale or inaccessible issue IDs, and one bad
//! ID must never sink the run.

use std::collections::HashSet;

use async_trait::async_trait;
use futures::future;
use thiserror::Error;

use crate::domain::{FetchedTask, IssueId};

/// Errors for a single fetch; recovered locally by dropping the ID
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Outcome of fetching one issue
#[derive(Debug)]
pub enum FetchOutcome {
    /// A well-formed task record
    Fetched(FetchedTask),
    /// Response parsed but lacks required fields; not an error, just no task
    Incomplete,
    /// Transport failure, non-2xx status, or unparseable body
    Failed(FetchError),
}

/// Capability to fetch one issue from the tracker
#[async_trait]
pub trait TaskFetcher: Send + Sync {
    async fn fetch(&self, id: &IssueId) -> FetchOutcome;
}

/// Fetches every ID concurrently and returns the surviving task records.
///
/// All fetches are dispatched at once with no concurrency cap and joined with
/// wait-all semantics: each ID settles to success or failure independently.
/// Failures and incomplete records are dropped with a diagnostic. Surviving
/// tasks keep input order, and their child IDs are filtered down to the
/// requested batch so foreign subtask references never enter the forest.
pub async fn collect_tasks<F>(fetcher: &F, ids: &[IssueId]) -> Vec<FetchedTask>
where
    F: TaskFetcher + ?Sized,
{
    let known: HashSet<&IssueId> = ids.iter().collect();
    let outcomes = future::join_all(ids.iter().map(|id| fetcher.fetch(id))).await;

    let mut tasks = Vec::new();
    for (id, outcome) in ids.iter().zip(outcomes) {
        match outcome {
            FetchOutcome::Fetched(mut task) => {
                task.child_ids.retain(|child| known.contains(child));
                tasks.push(task);
            }
            FetchOutcome::Incomplete => {
                tracing::debug!(id = %id, "issue skipped: record incomplete");
            }
            FetchOutcome::Failed(error) => {
                tracing::warn!(id = %id, error = %error, "issue fetch failed");
            }
        }
    }
    tasks
}
