//! Report Aggregator
//!
//! Collects validation outcomes into one report and computes the overall
//! score. The builder appends immutable outcomes; the score is computed once
//! at finalization and the report is never mutated afterwards.

use serde::Serialize;

use crate::validation::{Severity, ValidationOutcome};

/// The full audit result for one document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentReport {
    /// 0-100
    pub overall_score: u32,
    /// Outcomes in validator execution order
    pub results: Vec<ValidationOutcome>,
}

impl ContentReport {
    /// True if any error-severity outcome failed. CLI wrappers map this to a
    /// non-zero exit status.
    pub fn has_blocking_failures(&self) -> bool {
        self.results
            .iter()
            .any(|r| r.severity == Severity::Error && !r.passed)
    }
}

/// Accumulates outcomes and finalizes into a [`ContentReport`]
#[derive(Debug, Default)]
pub struct ReportBuilder {
    outcomes: Vec<ValidationOutcome>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: ValidationOutcome) {
        self.outcomes.push(outcome);
    }

    /// Compute the score and seal the report
    pub fn finish(self) -> ContentReport {
        let overall_score = score(&self.outcomes);
        ContentReport {
            overall_score,
            results: self.outcomes,
        }
    }
}

/// Aggregate a batch of outcomes into a finalized report
pub fn aggregate(outcomes: Vec<ValidationOutcome>) -> ContentReport {
    let mut builder = ReportBuilder::new();
    for outcome in outcomes {
        builder.push(outcome);
    }
    builder.finish()
}

/// Proportional pass rate, minus 10 points per unresolved error-severity
/// failure, floored at 0. An empty outcome list scores 0.
fn score(outcomes: &[ValidationOutcome]) -> u32 {
    let total = outcomes.len();
    if total == 0 {
        return 0;
    }
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let error_failures = outcomes
        .iter()
        .filter(|o| o.severity == Severity::Error && !o.passed)
        .count();

    let base = (passed as f64 / total as f64 * 100.0).round() as i64;
    (base - 10 * error_failures as i64).max(0) as u32
}
