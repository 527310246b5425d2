use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::models::{RawFeedResponse, RawPathsResponse, RawPostDetail};

/// Reads a saved content API response from disk.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read response file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid response JSON in {}", path.display()))
}

pub fn read_feed_response(path: &Path) -> Result<RawFeedResponse> {
    read_json(path)
}

pub fn read_post_detail(path: &Path) -> Result<RawPostDetail> {
    read_json(path)
}

pub fn read_paths_response(path: &Path) -> Result<RawPathsResponse> {
    read_json(path)
}
