//! Content Checks
//!
//! The individual validators of the battery. Each is a pure, total function
//! of the content model: undefined sub-computations (no paragraphs, no
//! links) yield an explanatory pass, never an error.

use crate::parser::ContentModel;
use crate::readability::estimate_grade_level;
use crate::validation::engine::{CheckFinding, Severity};

/// Link texts that say nothing about their destination
const GENERIC_LINK_TEXTS: &[&str] = &["click here", "read more", "here", "link", "more"];

/// Paragraphs longer than this many words hurt skimmability
const LONG_PARAGRAPH_WORDS: usize = 60;

/// Exactly one H1 per page
pub fn h1_tag(model: &ContentModel) -> CheckFinding {
    match model.h1_count {
        0 => CheckFinding::fail(
            "No H1 tag found",
            Severity::Error,
            "Add exactly one H1 tag with the primary keyword/entity",
        ),
        1 => CheckFinding::pass("Single H1 tag present"),
        n => CheckFinding::fail(
            format!("Multiple H1 tags found ({n})"),
            Severity::Error,
            "Use only one H1 tag per page",
        ),
    }
}

/// Heading levels must not jump up by more than one
pub fn heading_hierarchy(model: &ContentModel) -> CheckFinding {
    if model.headings.is_empty() {
        return CheckFinding::fail(
            "No headings found",
            Severity::Error,
            "Add an H1 heading with the primary keyword/entity",
        );
    }

    let levels: Vec<u8> = model.headings.iter().map(|h| h.level).collect();
    let issues: Vec<String> = levels
        .windows(2)
        .filter(|pair| pair[1] > pair[0] + 1)
        .map(|pair| format!("Skipped from H{} to H{}", pair[0], pair[1]))
        .collect();

    if !issues.is_empty() {
        return CheckFinding::fail(
            format!("Heading hierarchy issues: {}", issues.join("; ")),
            Severity::Warning,
            "Maintain sequential heading levels (H1 -> H2 -> H3)",
        );
    }
    CheckFinding::pass(format!(
        "Heading hierarchy is valid ({} headings)",
        model.headings.len()
    ))
}

/// At least one semantic HTML5 element
pub fn semantic_html(model: &ContentModel) -> CheckFinding {
    if model.semantic_elements.total() == 0 {
        return CheckFinding::fail(
            "No semantic HTML5 elements found",
            Severity::Warning,
            "Use <article>, <section>, <aside> for better machine parsing",
        );
    }
    CheckFinding::pass(format!(
        "Semantic elements present: {}",
        model.semantic_elements.present().join(", ")
    ))
}

/// JSON-LD schema markup present
pub fn schema_markup(model: &ContentModel) -> CheckFinding {
    if !model.has_schema_markup {
        return CheckFinding::fail(
            "No JSON-LD Schema markup found",
            Severity::Warning,
            "Add FAQPage, Article, or Organization schema for machine visibility",
        );
    }
    CheckFinding::pass("JSON-LD Schema markup present")
}

/// Body text should read at Grade 8 or below
pub fn readability(model: &ContentModel) -> CheckFinding {
    if model.paragraphs.is_empty() {
        return CheckFinding::pass("No paragraph text to analyse");
    }

    let text = model.paragraphs.join(" ");
    let grade = estimate_grade_level(&text);

    if grade > 12.0 {
        return CheckFinding::fail(
            format!("Reading level too high: Grade {grade:.1}"),
            Severity::Warning,
            "Simplify sentences for the Grade 8 target. Use shorter sentences and simpler words.",
        );
    }
    if grade > 8.0 {
        return CheckFinding::pass_with_note(
            format!("Reading level acceptable: Grade {grade:.1} (target: 8)"),
            "Consider simplifying for broader accessibility",
        );
    }
    CheckFinding::pass(format!("Reading level excellent: Grade {grade:.1}"))
}

/// Lists, bold emphasis and short paragraphs make content skimmable.
/// One sub-issue is a warning; two or more fail the check outright.
pub fn scannability(model: &ContentModel) -> CheckFinding {
    let mut issues = Vec::new();

    if model.list_count() == 0 {
        issues.push("No bullet/numbered lists".to_string());
    }
    if model.bold_count < 3 {
        issues.push("Limited use of bold text for emphasis".to_string());
    }
    let long_paragraphs = model
        .paragraphs
        .iter()
        .filter(|p| p.split_whitespace().count() > LONG_PARAGRAPH_WORDS)
        .count();
    if long_paragraphs > 0 {
        issues.push(format!("{long_paragraphs} paragraphs exceed 60 words"));
    }

    if issues.is_empty() {
        return CheckFinding::pass("Content is well-formatted for skimming");
    }

    let minor = issues.len() < 2;
    CheckFinding {
        passed: minor,
        message: format!("Scannability issues: {}", issues.join("; ")),
        severity: if minor {
            Severity::Warning
        } else {
            Severity::Error
        },
        recommendation: "Use bullet points, bold key phrases, and shorter paragraphs (73% of users skim)"
            .to_string(),
    }
}

/// Link text must describe the destination
pub fn link_text(model: &ContentModel) -> CheckFinding {
    let mut found: Vec<&str> = Vec::new();
    for text in &model.link_texts {
        let lowered = text.to_lowercase();
        if GENERIC_LINK_TEXTS.contains(&lowered.as_str()) && !found.contains(&text.as_str()) {
            found.push(text);
        }
    }

    if !found.is_empty() {
        return CheckFinding::fail(
            format!("Generic link text found: {}", found.join(", ")),
            Severity::Warning,
            "Use descriptive link text for accessibility and SEO (e.g., 'Read our SEO guide')",
        );
    }
    CheckFinding::pass(format!(
        "Link text is descriptive ({} links checked)",
        model.link_texts.len()
    ))
}

/// Every image needs non-empty alt text
pub fn image_alt_text(model: &ContentModel) -> CheckFinding {
    let total = model.image_count();
    if total == 0 {
        return CheckFinding::pass("No images found");
    }
    if model.images_without_alt > 0 {
        return CheckFinding::fail(
            format!(
                "{} of {} images missing alt text",
                model.images_without_alt, total
            ),
            Severity::Error,
            "Add descriptive alt text to all images (accessibility + visual search)",
        );
    }
    CheckFinding::pass(format!("All {total} images have alt text"))
}

/// Question-format headings signal answer-first structure. Informational
/// only: this check always passes and never affects the score penalty.
pub fn answer_first(model: &ContentModel) -> CheckFinding {
    let questions = model
        .headings
        .iter()
        .filter(|h| h.text.trim().ends_with('?'))
        .count();

    if questions == 0 {
        return CheckFinding::pass_with_note(
            "No question-format headings found",
            "Consider question H2s for voice search (e.g., 'What is Entity SEO?')",
        );
    }
    CheckFinding::pass(format!(
        "{questions} question-format headings found (good for voice search)"
    ))
}
