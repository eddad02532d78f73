//! Issue identifiers
//!
//! Issue IDs are opaque tokens owned by the external tracker (e.g. `PROJ-42`).
//! No format is enforced: whatever the tracker accepts is a valid ID here,
//! and garbage IDs simply fail their fetch later on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque issue identifier, unique within a run
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(String);

impl IssueId {
    /// Returns the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for IssueId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for IssueId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
