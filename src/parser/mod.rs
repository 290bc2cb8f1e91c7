//! Structural Parser
//!
//! Single-pass extraction of a normalized content model from raw markup.
//! No DOM is built: the lexer streams start-tag, end-tag and text events and
//! the model builder folds them into counts and text sequences.

pub mod lexer;
pub mod model;

pub use lexer::{StartTag, Token, tokenize};
pub use model::{ContentModel, Heading, SemanticCounts};

/// Parse a markup string into a [`ContentModel`]
///
/// Total over any input: malformed markup degrades to a partial (possibly
/// all-zero) model, never an error.
pub fn parse_document(markup: &str) -> ContentModel {
    let mut builder = model::ModelBuilder::new();
    for token in lexer::tokenize(markup) {
        match token {
            Token::StartTag(tag) => {
                builder.start_tag(&tag);
                // A self-closed tag opens and closes in one event, so no
                // text slot stays open to capture the following text
                if tag.self_closing {
                    builder.end_tag(&tag.name);
                }
            }
            Token::EndTag(name) => builder.end_tag(&name),
            Token::Text(data) => builder.text(&data),
        }
    }
    builder.finish()
}
