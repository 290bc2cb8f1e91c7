//! Content Lint
//!
//! An HTML content quality auditor. One forward pass over raw markup builds
//! a normalized content model; a fixed battery of checks (heading structure,
//! semantic markup, schema presence, readability, scannability, link text,
//! image accessibility, answer-first structure) then scores the document.
//!
//! This library provides:
//! - Streaming structural parsing of markup (no DOM)
//! - Readability estimation (Flesch-Kincaid approximation)
//! - The validator battery and report aggregation
//! - Input loading and report rendering for the CLI

pub mod config;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod readability;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use parser::{ContentModel, parse_document};
pub use report::{ContentReport, aggregate};
pub use validation::{Severity, ValidationOutcome, run_checks};

/// Run the full audit pipeline over one markup string.
///
/// Never fails: malformed markup degrades to failing outcomes, not errors.
pub fn audit(markup: &str) -> ContentReport {
    let model = parser::parse_document(markup);
    report::aggregate(validation::run_checks(&model))
}
