//! Loading the pre-categorized posting dataset.
//!
//! The dataset is a JSON array produced ahead of time by the categorizer;
//! it is parsed once at startup and treated as immutable afterwards.

use std::path::Path;

use anyhow::Context;
use common::job_posting::JobPosting;
use tracing::info;

pub const DEFAULT_POSTS_PATH: &str = "data/HN_POSTS_CATEGORIZED.json";

pub fn parse_postings(json: &str) -> anyhow::Result<Vec<JobPosting>> {
    let postings: Vec<JobPosting> =
        serde_json::from_str(json).context("invalid postings JSON")?;
    Ok(postings)
}

pub fn load_postings(path: impl AsRef<Path>) -> anyhow::Result<Vec<JobPosting>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading postings from {}", path.display()))?;
    let postings = parse_postings(&json)?;
    info!("Loaded {} postings from {}", postings.len(), path.display());
    Ok(postings)
}

pub fn load_postings_from_env() -> anyhow::Result<Vec<JobPosting>> {
    let path = std::env::var("JOB_POSTS_PATH").unwrap_or(DEFAULT_POSTS_PATH.to_string());
    load_postings(path)
}
