//! Conjunctive filtering of the posting collection.

use std::collections::BTreeSet;

use common::job_posting::JobPosting;
use common::search_query::FilterState;

/// Returns the postings satisfying every active predicate in `state`,
/// preserving their relative order in the input.
///
/// Categories combine with AND; within one multi-select category any
/// single selected value matching is sufficient. An empty selection set
/// and an unset boolean place no constraint.
pub fn filter_postings(postings: &[JobPosting], state: &FilterState) -> Vec<JobPosting> {
    postings
        .iter()
        .filter(|posting| matches_state(posting, state))
        .cloned()
        .collect()
}

fn matches_state(posting: &JobPosting, state: &FilterState) -> bool {
    if state.remote && !posting.metadata.is_remote {
        return false;
    }

    if state.compensation && !posting.metadata.discloses_compensation() {
        return false;
    }

    if state.global && !posting.metadata.is_global_remote {
        return false;
    }

    if !selection_matches(&state.positions, &posting.categorized_positions) {
        return false;
    }

    if !selection_matches(&state.technologies, &posting.categorized_tech) {
        return false;
    }

    if !selection_matches(&state.locations, posting.metadata.remote_locations()) {
        return false;
    }

    true
}

fn selection_matches(selected: &BTreeSet<String>, values: &[String]) -> bool {
    selected.is_empty() || values.iter().any(|value| selected.contains(value))
}
