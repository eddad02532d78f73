//! Issue-tracker access
//!
//! Thin I/O boundary around the core: the [`TaskFetcher`] capability, the
//! wait-all batch collector, and the reqwest-backed implementation.

mod client;
mod http;

pub use client::{collect_tasks, FetchError, FetchOutcome, TaskFetcher};
pub use http::HttpFetcher;
