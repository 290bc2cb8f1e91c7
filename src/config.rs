//! Configuration management for the content linter.
//!
//! Handles:
//! - Command-line argument parsing
//! - Input source selection (file vs. URL)

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::fetch::Source;

/// Command-line arguments for the content linter
#[derive(Debug, Parser)]
#[command(name = "content-lint")]
#[command(about = "Validate HTML content against content-engineering standards")]
#[command(version)]
pub struct Args {
    /// HTML file to validate
    #[arg(long, short = 'f', help = "HTML file to validate")]
    pub file: Option<PathBuf>,

    /// URL to fetch and validate
    #[arg(long, short = 'u', help = "URL to fetch and validate")]
    pub url: Option<String>,

    /// Emit the report as JSON instead of text
    #[arg(long, short = 'j', help = "Output the report as JSON")]
    pub json: bool,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Where to read the markup from
    pub source: Source,
    /// Render the report as JSON
    pub json: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let source = match (args.file, args.url) {
            (Some(path), None) => Source::File(path),
            (None, Some(url)) => Source::Url(url),
            (Some(_), Some(_)) => bail!("provide either --file or --url, not both"),
            (None, None) => bail!("provide --file or --url"),
        };

        Ok(Config {
            source,
            json: args.json,
            log_level: args.log_level,
        })
    }
}
