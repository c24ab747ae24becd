use serde::{Deserialize, Serialize};


/// Per-category facet values with occurrence counts, in lexicographic
/// order of the value. Consumed by the presentation layer to render the
/// selectable facet lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FacetCounts {
    pub technologies: Vec<FacetValueCount>,
    pub positions: Vec<FacetValueCount>,
    pub locations: Vec<FacetValueCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacetValueCount {
    pub value: String,
    pub count: u64,
}

impl FacetValueCount {
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self { value: value.into(), count }
    }
}
