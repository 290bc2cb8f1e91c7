//! Content Loading
//!
//! The one external collaborator: obtaining the markup string, from a local
//! file or over HTTP, entirely before the core pipeline runs.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the markup comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

/// Load the complete markup string from a source
pub fn load(source: &Source) -> Result<String> {
    match source {
        Source::File(path) => {
            log::debug!("reading markup from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("failed to read file: {}", path.display()))
        }
        Source::Url(url) => {
            log::debug!("fetching markup from {url}");
            let client = reqwest::blocking::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .context("failed to build HTTP client")?;
            let response = client
                .get(url)
                .send()
                .with_context(|| format!("failed to fetch URL: {url}"))?
                .error_for_status()
                .with_context(|| format!("server returned an error for {url}"))?;
            response
                .text()
                .with_context(|| format!("failed to read response body from {url}"))
        }
    }
}
