//! Taskforest - issue-tracker task hierarchies, rendered
//!
//! Reads a batch of issue IDs from stdin, fetches each from the tracker's
//! REST API concurrently, reassembles the parent/child subtask hierarchy
//! from whatever subset of fetches succeeded, and prints it either as an
//! indented outline or as a Slack message payload.

pub mod cli;
pub mod config;
pub mod domain;
pub mod render;
pub mod tracker;

pub use domain::{build_forest, Forest, IssueId, Task};
