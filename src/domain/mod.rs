//! Domain model
//!
//! Issue IDs, task records, and the forest-assembly core. Everything here is
//! pure: fetching lives in [`crate::tracker`], rendering in [`crate::render`].

mod forest;
mod id;
mod normalize;
mod task;

pub use forest::{build_forest, Forest};
pub use id::IssueId;
pub use normalize::normalize_ids;
pub use task::{FetchedTask, Subtask, SubtaskNode, Task};
