//! Facet aggregation over the full posting collection.

use std::collections::BTreeMap;

use common::job_posting::JobPosting;
use common::search_result::{FacetCounts, FacetValueCount};

/// Counts, per facet category, how many postings carry each tag value,
/// keeping only values that contain `search` as a literal substring
/// (case-sensitive; an empty `search` keeps everything).
///
/// Always runs over the full unfiltered collection so that facet lists stay
/// complete while filters are active. Values are returned in lexicographic
/// order per category; values with no match after the search restriction
/// are omitted rather than emitted with a zero count.
///
/// Counting assumes per-posting tag uniqueness (see [`JobPosting`]); a
/// duplicated tag within one posting would inflate its count.
pub fn aggregate_facets(postings: &[JobPosting], search: &str) -> FacetCounts {
    let mut technologies = BTreeMap::new();
    let mut positions = BTreeMap::new();
    let mut locations = BTreeMap::new();

    for posting in postings {
        count_values(&mut technologies, &posting.categorized_tech, search);
        count_values(&mut positions, &posting.categorized_positions, search);
        count_values(&mut locations, posting.metadata.remote_locations(), search);
    }

    FacetCounts {
        technologies: into_counts(technologies),
        positions: into_counts(positions),
        locations: into_counts(locations),
    }
}

fn count_values(counts: &mut BTreeMap<String, u64>, values: &[String], search: &str) {
    for value in values {
        if !search.is_empty() && !value.contains(search) {
            continue;
        }
        *counts.entry(value.clone()).or_insert(0) += 1;
    }
}

// BTreeMap iteration order is the required lexicographic output order.
fn into_counts(counts: BTreeMap<String, u64>) -> Vec<FacetValueCount> {
    counts
        .into_iter()
        .map(|(value, count)| FacetValueCount { value, count })
        .collect()
}


#[cfg(test)]
mod tests {
    use common::job_posting::PostingMetadata;

    use super::*;

    fn posting(id: u64, tech: &[&str]) -> JobPosting {
        JobPosting {
            id,
            description: String::new(),
            categorized_tech: tech.iter().map(|s| s.to_string()).collect(),
            categorized_positions: vec![],
            metadata: PostingMetadata::default(),
        }
    }

    #[test]
    fn counts_values_across_postings() {
        let postings = vec![posting(1, &["Go", "Rust"]), posting(2, &["Go"])];
        let counts = aggregate_facets(&postings, "");
        assert_eq!(
            counts.technologies,
            vec![FacetValueCount::new("Go", 2), FacetValueCount::new("Rust", 1)]
        );
    }

    #[test]
    fn output_is_lexicographic() {
        let postings = vec![posting(1, &["Zig", "Ada", "Go"])];
        let values: Vec<_> = aggregate_facets(&postings, "")
            .technologies
            .into_iter()
            .map(|item| item.value)
            .collect();
        assert_eq!(values, vec!["Ada", "Go", "Zig"]);
    }

    #[test]
    fn search_restricts_by_substring() {
        let postings = vec![posting(1, &["Go", "Golang", "Rust"])];
        let counts = aggregate_facets(&postings, "Go");
        assert_eq!(
            counts.technologies,
            vec![FacetValueCount::new("Go", 1), FacetValueCount::new("Golang", 1)]
        );
    }

    #[test]
    fn search_is_case_sensitive() {
        let postings = vec![posting(1, &["Go", "django"])];
        let counts = aggregate_facets(&postings, "go");
        assert_eq!(counts.technologies, vec![FacetValueCount::new("django", 1)]);
    }

    #[test]
    fn unmatched_values_are_omitted_not_zeroed() {
        let postings = vec![posting(1, &["Rust"])];
        let counts = aggregate_facets(&postings, "Go");
        assert!(counts.technologies.is_empty());
    }

    #[test]
    fn missing_remote_locations_contribute_nothing() {
        let postings = vec![posting(1, &["Go"])];
        let counts = aggregate_facets(&postings, "");
        assert!(counts.locations.is_empty());
    }

    #[test]
    fn locations_counted_when_present() {
        let mut with_locations = posting(1, &[]);
        with_locations.metadata.remote_only_location =
            Some(vec!["EU".to_string(), "US".to_string()]);
        let counts = aggregate_facets(&[with_locations], "");
        assert_eq!(
            counts.locations,
            vec![FacetValueCount::new("EU", 1), FacetValueCount::new("US", 1)]
        );
    }
}
