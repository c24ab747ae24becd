//! In-memory filtering and faceted-aggregation engine for the posting dataset.
//!
//! The engine is stateless: both entry points re-derive their output from
//! the full collection on every call. The caller owns the filter state and
//! the search string and re-invokes on every change.

pub mod dataset;
pub mod search;
