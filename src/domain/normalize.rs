//! Issue ID normalization
//!
//! Turns the raw stdin batch into the authoritative known-ID set for the run:
//! one ID per line, blanks dropped, duplicates collapsed to their first
//! occurrence. Malformed lines are not rejected here; they simply fail their
//! fetch later.

use std::collections::HashSet;

use super::id::IssueId;

/// Normalizes raw multi-line input into an ordered set of unique issue IDs
pub fn normalize_ids(input: &str) -> Vec<IssueId> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            ids.push(IssueId::from(trimmed));
        }
    }

    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(raw: &[&str]) -> Vec<IssueId> {
        raw.iter().map(|s| IssueId::from(*s)).collect()
    }

    #[test]
    fn dedupes_preserving_first_occurrence() {
        assert_eq!(normalize_ids("A\nA\nB\n\n"), ids(&["A", "B"]));
    }

    #[test]
    fn drops_blank_and_whitespace_lines() {
        assert_eq!(normalize_ids("\n  \nPROJ-1\n\t\nPROJ-2\n"), ids(&["PROJ-1", "PROJ-2"]));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_ids("  PROJ-1  \nPROJ-1\n"), ids(&["PROJ-1"]));
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(normalize_ids("").is_empty());
    }

    #[test]
    fn order_is_first_occurrence() {
        assert_eq!(normalize_ids("B\nA\nB\nC\nA\n"), ids(&["B", "A", "C"]));
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(input in "[A-Z0-9\\- \n]{0,64}") {
            let once = normalize_ids(&input);
            let rejoined = once
                .iter()
                .map(IssueId::as_str)
                .collect::<Vec<_>>()
                .join("\n");
            let twice = normalize_ids(&rejoined);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn output_has_no_duplicates_or_blanks(input in "[A-Z0-9\\- \n]{0,64}") {
            let out = normalize_ids(&input);
            let unique: std::collections::HashSet<_> = out.iter().collect();
            prop_assert_eq!(unique.len(), out.len());
            prop_assert!(out.iter().all(|id| !id.as_str().trim().is_empty()));
        }
    }
}
