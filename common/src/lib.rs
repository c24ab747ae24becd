//! Common library exports shared between the engine and the presentation layer.

extern crate serde;


pub mod job_posting;
pub mod search_query;
pub mod search_result;
