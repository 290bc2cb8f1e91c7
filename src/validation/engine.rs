//! Validation Engine
//!
//! Runs the fixed, ordered battery of content checks over a parsed model.
//! Report ordering is an external contract, so the battery is a table that
//! is iterated, never a hand-inlined sequence of calls.

use serde::Serialize;

use crate::parser::ContentModel;
use crate::validation::checks;

/// Severity of a validation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One category's verdict, as it appears in the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
    pub category: String,
    pub passed: bool,
    pub message: String,
    pub severity: Severity,
    /// Remediation hint; empty when not applicable
    pub recommendation: String,
}

/// A single check's verdict, before the engine tags it with its category
#[derive(Debug, Clone, PartialEq)]
pub struct CheckFinding {
    pub passed: bool,
    pub message: String,
    pub severity: Severity,
    pub recommendation: String,
}

impl CheckFinding {
    /// A clean pass with no remediation
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            severity: Severity::Info,
            recommendation: String::new(),
        }
    }

    /// A pass that still carries an advisory recommendation
    pub fn pass_with_note(message: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            severity: Severity::Info,
            recommendation: recommendation.into(),
        }
    }

    pub fn fail(
        message: impl Into<String>,
        severity: Severity,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            passed: false,
            message: message.into(),
            severity,
            recommendation: recommendation.into(),
        }
    }
}

/// A check unit: a category label plus a total function over the model
pub struct Check {
    pub category: &'static str,
    pub run: fn(&ContentModel) -> CheckFinding,
}

/// The battery, in execution (and therefore report) order
pub const CHECKS: &[Check] = &[
    Check {
        category: "H1 Tag",
        run: checks::h1_tag,
    },
    Check {
        category: "Heading Hierarchy",
        run: checks::heading_hierarchy,
    },
    Check {
        category: "Semantic HTML",
        run: checks::semantic_html,
    },
    Check {
        category: "Schema Markup",
        run: checks::schema_markup,
    },
    Check {
        category: "Readability",
        run: checks::readability,
    },
    Check {
        category: "Scannability",
        run: checks::scannability,
    },
    Check {
        category: "Link Text",
        run: checks::link_text,
    },
    Check {
        category: "Image Alt Text",
        run: checks::image_alt_text,
    },
    Check {
        category: "Answer-First",
        run: checks::answer_first,
    },
];

/// Run every check against the model, in battery order
pub fn run_checks(model: &ContentModel) -> Vec<ValidationOutcome> {
    CHECKS
        .iter()
        .map(|check| {
            let finding = (check.run)(model);
            ValidationOutcome {
                category: check.category.to_string(),
                passed: finding.passed,
                message: finding.message,
                severity: finding.severity,
                recommendation: finding.recommendation,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_battery_order_is_stable() {
        let outcomes = run_checks(&ContentModel::default());
        let categories: Vec<&str> = outcomes.iter().map(|o| o.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "H1 Tag",
                "Heading Hierarchy",
                "Semantic HTML",
                "Schema Markup",
                "Readability",
                "Scannability",
                "Link Text",
                "Image Alt Text",
                "Answer-First",
            ]
        );
    }

    #[test]
    fn test_every_check_is_total_on_empty_model() {
        // No check may panic on a zero-valued model
        let outcomes = run_checks(&ContentModel::default());
        assert_eq!(outcomes.len(), CHECKS.len());
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).expect("serialize");
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn test_checks_are_independent_of_run_order() {
        let model = parse_document("<h1>T</h1><h1>T2</h1><p>text here.</p>");
        let first = run_checks(&model);
        let second = run_checks(&model);
        assert_eq!(first, second);
    }
}
