//! Report Rendering
//!
//! Serializes a finished report for humans (grouped text) or pipelines
//! (JSON). Outcome order within each group follows validator execution
//! order.

use anyhow::Result;

use crate::report::ContentReport;
use crate::validation::{Severity, ValidationOutcome};

const BANNER: &str = "============================================================";

/// Render the line-oriented human report: Errors, then Warnings, then Passed
pub fn render_text(report: &ContentReport) -> String {
    let mut lines = vec![
        BANNER.to_string(),
        "CONTENT VALIDATION REPORT".to_string(),
        format!("Overall Score: {}/100", report.overall_score),
        BANNER.to_string(),
        String::new(),
    ];

    let errors: Vec<&ValidationOutcome> = report
        .results
        .iter()
        .filter(|r| r.severity == Severity::Error && !r.passed)
        .collect();
    let warnings: Vec<&ValidationOutcome> = report
        .results
        .iter()
        .filter(|r| r.severity == Severity::Warning && !r.passed)
        .collect();
    let passed: Vec<&ValidationOutcome> = report.results.iter().filter(|r| r.passed).collect();

    if !errors.is_empty() {
        lines.push("ERRORS (must fix):".to_string());
        push_group(&mut lines, &errors, "[X]", true);
    }
    if !warnings.is_empty() {
        lines.push("WARNINGS (should fix):".to_string());
        push_group(&mut lines, &warnings, "[!]", true);
    }
    if !passed.is_empty() {
        lines.push("PASSED:".to_string());
        push_group(&mut lines, &passed, "[+]", false);
    }

    lines.push(BANNER.to_string());
    lines.join("\n")
}

fn push_group(
    lines: &mut Vec<String>,
    outcomes: &[&ValidationOutcome],
    prefix: &str,
    with_recommendations: bool,
) {
    for outcome in outcomes {
        lines.push(format!("  {prefix} {}: {}", outcome.category, outcome.message));
        if with_recommendations && !outcome.recommendation.is_empty() {
            lines.push(format!("      -> {}", outcome.recommendation));
        }
    }
    lines.push(String::new());
}

/// Render the report as a pretty-printed JSON document
pub fn render_json(report: &ContentReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
