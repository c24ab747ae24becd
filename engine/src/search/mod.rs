//! Search module exports: record filtering and facet aggregation.

mod filter_postings;
pub use filter_postings::filter_postings;

mod search_facets;
pub use search_facets::aggregate_facets;
