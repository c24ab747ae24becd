//! Job posting record models.

use serde::{Deserialize, Serialize};

/// One categorized posting from the monthly hiring thread. The collection
/// is loaded once and never mutated afterwards.
///
/// Tag lists are expected to be free of duplicates within a single posting;
/// the categorizer guarantees this upstream and facet counting relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u64,
    pub description: String,
    pub categorized_tech: Vec<String>,
    pub categorized_positions: Vec<String>,
    pub metadata: PostingMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PostingMetadata {
    pub is_remote: bool,
    pub is_global_remote: bool,
    pub compensation: Option<CompensationRange>,
    pub remote_only_location: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompensationRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

impl PostingMetadata {
    /// Whether the posting states any compensation figure.
    ///
    /// A value of exactly 0 counts as "not disclosed", matching the source
    /// dataset's convention. A posting advertising a genuine $0 minimum
    /// would therefore not pass the compensation filter.
    pub fn discloses_compensation(&self) -> bool {
        let Some(compensation) = &self.compensation else {
            return false;
        };
        compensation.min.unwrap_or(0) != 0 || compensation.max.unwrap_or(0) != 0
    }

    /// Locations this posting hires from, empty when unrestricted.
    pub fn remote_locations(&self) -> &[String] {
        self.remote_only_location.as_deref().unwrap_or(&[])
    }
}
