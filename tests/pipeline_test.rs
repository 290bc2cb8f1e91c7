use content_lint::validation::Severity;
use content_lint::{audit, parse_document};

/// A page with everything the rubric wants: single H1, sequential headings,
/// semantic containers, JSON-LD, simple short paragraphs, a list, bold
/// emphasis, descriptive links and alt text on every image.
const CLEAN_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<script type="application/ld+json">{"@type": "Article"}</script>
</head>
<body>
<article>
<h1>Loose Leaf Tea</h1>
<p>We sell <strong>loose leaf tea</strong>. It is fresh. It ships fast.</p>
<h2>What is loose leaf tea?</h2>
<p>It is tea sold as <strong>whole leaves</strong>. The cup tastes clean.</p>
<h3>How to brew it</h3>
<ul><li>Heat the water.</li><li>Steep for <strong>three minutes</strong>.</li></ul>
<p>See our <a href="/guide">full brewing guide</a> for more tips.</p>
<img src="/leaves.jpg" alt="Dried tea leaves on a scale">
</article>
</body>
</html>"#;

#[test]
fn clean_page_scores_one_hundred() {
    let report = audit(CLEAN_PAGE);
    for outcome in &report.results {
        assert!(
            outcome.passed,
            "{} failed: {}",
            outcome.category, outcome.message
        );
    }
    assert_eq!(report.overall_score, 100);
    assert!(!report.has_blocking_failures());
}

#[test]
fn page_missing_schema_scores_eighty_nine() {
    // Single H1, three short paragraphs, one list, two bold tags, an image
    // with alt text, no links, no schema script. Only Schema Markup fails
    // (warning); Scannability records one sub-issue but still passes.
    let markup = r#"<article>
<h1>Title</h1>
<p>First <strong>short</strong> paragraph. It is fine.</p>
<p>Second <b>short</b> paragraph. Also fine.</p>
<p>Third short paragraph. Still fine.</p>
<ul><li>one</li><li>two</li></ul>
<img src="x.png" alt="A thing">
</article>"#;

    let report = audit(markup);

    let schema = outcome(&report, "Schema Markup");
    assert!(!schema.0);
    assert_eq!(schema.1, Severity::Warning);

    let scannability = outcome(&report, "Scannability");
    assert!(scannability.0);
    assert_eq!(scannability.1, Severity::Warning);

    let passed = report.results.iter().filter(|r| r.passed).count();
    assert_eq!(passed, 8);
    assert_eq!(report.overall_score, 89);
    assert!(!report.has_blocking_failures());
}

#[test]
fn empty_document_reports_all_missing_structure() {
    let report = audit("");
    assert_eq!(report.results.len(), 9);

    // H1, Heading Hierarchy and Scannability (two sub-issues) fail as
    // errors; Semantic HTML and Schema Markup fail as warnings:
    // round(100*4/9) - 3*10 = 44 - 30 = 14
    assert_eq!(report.overall_score, 14);
    assert!(report.has_blocking_failures());

    let readability = outcome(&report, "Readability");
    assert!(readability.0, "readability must pass with no paragraphs");
}

#[test]
fn malformed_markup_still_produces_a_complete_report() {
    for garbage in ["<<<>>>", "<h1>never closed", "\u{0}\u{1}\u{2}", "<p><p><p>"] {
        let report = audit(garbage);
        assert_eq!(report.results.len(), 9, "input: {garbage:?}");
    }
}

#[test]
fn audit_is_deterministic() {
    assert_eq!(audit(CLEAN_PAGE), audit(CLEAN_PAGE));
    assert_eq!(parse_document(CLEAN_PAGE), parse_document(CLEAN_PAGE));
}

#[test]
fn generic_link_text_fails_link_check() {
    let markup = r#"<h1>T</h1><a href="/x">click here</a><a href="/y">our detailed pricing</a>"#;
    let report = audit(markup);
    let link = outcome(&report, "Link Text");
    assert!(!link.0);
    assert_eq!(link.1, Severity::Warning);
}

#[test]
fn skipped_heading_level_fails_hierarchy() {
    let report = audit("<h1>Top</h1><h3>Deep</h3>");
    let hierarchy = report
        .results
        .iter()
        .find(|r| r.category == "Heading Hierarchy")
        .expect("hierarchy outcome");
    assert!(!hierarchy.passed);
    assert_eq!(hierarchy.severity, Severity::Warning);
    assert!(hierarchy.message.contains("Skipped from H1 to H3"));
}

fn outcome(report: &content_lint::ContentReport, category: &str) -> (bool, Severity) {
    let r = report
        .results
        .iter()
        .find(|r| r.category == category)
        .unwrap_or_else(|| panic!("missing outcome for {category}"));
    (r.passed, r.severity)
}
