//! Content Model
//!
//! Normalized structural extraction from markup, decoupled from raw tag
//! syntax. Pure data representation plus the builder that accumulates it
//! from lexer events. No validation logic lives here.

use crate::parser::lexer::StartTag;

/// A heading in document order
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    /// Level 1-6
    pub level: u8,
    /// Trimmed inner text
    pub text: String,
}

/// Occurrence counts for the semantic HTML5 elements we track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SemanticCounts {
    pub article: usize,
    pub section: usize,
    pub aside: usize,
    pub nav: usize,
    pub header: usize,
    pub footer: usize,
}

impl SemanticCounts {
    pub fn total(&self) -> usize {
        self.article + self.section + self.aside + self.nav + self.header + self.footer
    }

    /// Names of the elements seen at least once, in declaration order
    pub fn present(&self) -> Vec<&'static str> {
        [
            ("article", self.article),
            ("section", self.section),
            ("aside", self.aside),
            ("nav", self.nav),
            ("header", self.header),
            ("footer", self.footer),
        ]
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(name, _)| name)
        .collect()
    }

    /// Count the tag if it is one of the tracked semantic elements
    fn record(&mut self, tag: &str) {
        match tag {
            "article" => self.article += 1,
            "section" => self.section += 1,
            "aside" => self.aside += 1,
            "nav" => self.nav += 1,
            "header" => self.header += 1,
            "footer" => self.footer += 1,
            _ => {}
        }
    }
}

/// Structural extraction of one document, immutable after parsing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentModel {
    /// Headings in document order
    pub headings: Vec<Heading>,
    /// Non-empty paragraph texts in document order
    pub paragraphs: Vec<String>,
    /// Number of `<ul>` elements
    pub unordered_lists: usize,
    /// Number of `<ol>` elements
    pub ordered_lists: usize,
    /// Semantic HTML5 element counts
    pub semantic_elements: SemanticCounts,
    /// Number of `<strong>`/`<b>` elements opened
    pub bold_count: usize,
    /// Non-empty anchor inner texts in document order
    pub link_texts: Vec<String>,
    /// Images carrying a non-empty `alt` attribute
    pub images_with_alt: usize,
    /// Images with a missing or blank `alt` attribute
    pub images_without_alt: usize,
    /// True once any `<script type="application/ld+json">` is seen
    pub has_schema_markup: bool,
    /// Number of `<h1>` start tags, counted even when the text is empty
    pub h1_count: usize,
}

impl ContentModel {
    pub fn list_count(&self) -> usize {
        self.unordered_lists + self.ordered_lists
    }

    pub fn image_count(&self) -> usize {
        self.images_with_alt + self.images_without_alt
    }
}

/// Accumulates a [`ContentModel`] from lexer events.
///
/// Tracks at most one open heading, paragraph and link at a time (single-slot
/// state, no tag stack). Nested same-type elements are a documented
/// approximation: an inner close flushes the currently tracked element, and
/// text seen while no tracked element is open is discarded.
#[derive(Debug, Default)]
pub(crate) struct ModelBuilder {
    model: ContentModel,
    current_heading: Option<Heading>,
    current_paragraph: Option<String>,
    current_link: Option<String>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_tag(&mut self, tag: &StartTag) {
        match tag.name.as_str() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = tag.name.as_bytes()[1] - b'0';
                if level == 1 {
                    self.model.h1_count += 1;
                }
                self.current_heading = Some(Heading {
                    level,
                    text: String::new(),
                });
            }
            "p" => self.current_paragraph = Some(String::new()),
            "a" => self.current_link = Some(String::new()),
            "ul" => self.model.unordered_lists += 1,
            "ol" => self.model.ordered_lists += 1,
            "strong" | "b" => self.model.bold_count += 1,
            "img" => {
                let has_alt = tag.attr("alt").is_some_and(|alt| !alt.trim().is_empty());
                if has_alt {
                    self.model.images_with_alt += 1;
                } else {
                    self.model.images_without_alt += 1;
                }
            }
            "script" => {
                if tag.attr("type") == Some("application/ld+json") {
                    self.model.has_schema_markup = true;
                }
            }
            name => self.model.semantic_elements.record(name),
        }
    }

    pub fn end_tag(&mut self, name: &str) {
        match name {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = name.as_bytes()[1] - b'0';
                // Only a level-matching close flushes the open heading
                if let Some(mut heading) = self.current_heading.take_if(|h| h.level == level) {
                    heading.text = heading.text.trim().to_string();
                    self.model.headings.push(heading);
                }
            }
            "p" => {
                if let Some(text) = self.current_paragraph.take() {
                    let text = text.trim();
                    if !text.is_empty() {
                        self.model.paragraphs.push(text.to_string());
                    }
                }
            }
            "a" => {
                if let Some(text) = self.current_link.take() {
                    let text = text.trim();
                    if !text.is_empty() {
                        self.model.link_texts.push(text.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    /// Feed text into whichever tracked elements are currently open
    pub fn text(&mut self, data: &str) {
        if let Some(heading) = self.current_heading.as_mut() {
            heading.text.push_str(data);
        }
        if let Some(paragraph) = self.current_paragraph.as_mut() {
            paragraph.push_str(data);
        }
        if let Some(link) = self.current_link.as_mut() {
            link.push_str(data);
        }
    }

    pub fn finish(self) -> ContentModel {
        self.model
    }
}
