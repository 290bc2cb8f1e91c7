//! HTML Lexer
//!
//! Single forward pass tokenization of raw markup into start-tag, end-tag and
//! text events. Focus: never fail, skip what cannot be made sense of.

/// A start tag with its parsed attributes
#[derive(Debug, Clone, PartialEq)]
pub struct StartTag {
    /// Tag name, lowercased (e.g., "h1", "img")
    pub name: String,
    /// Attributes in document order, names lowercased
    pub attrs: Vec<(String, String)>,
    /// Whether the tag ended with "/>"
    pub self_closing: bool,
}

impl StartTag {
    /// Look up an attribute value by (lowercase) name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A markup event in document order
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    StartTag(StartTag),
    EndTag(String),
    Text(String),
}

/// Elements whose body is raw text: no tags are recognized inside them
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Tokenize a markup string into start-tag, end-tag and text events
///
/// Total over any input: malformed or unterminated tags are dropped, stray
/// `<` characters fall through as text, and the scan always terminates after
/// one forward pass.
pub fn tokenize(markup: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let bytes = markup.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        // Everything up to the next '<' is text
        let Some(lt) = find_byte(bytes, pos, b'<') else {
            push_text(&mut tokens, &markup[pos..]);
            break;
        };
        if lt > pos {
            push_text(&mut tokens, &markup[pos..lt]);
        }
        pos = lt;

        match bytes.get(pos + 1).copied() {
            Some(b'/') => {
                pos = lex_end_tag(markup, pos, &mut tokens);
            }
            Some(b'!') | Some(b'?') => {
                pos = skip_declaration(bytes, pos);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                let (next, tag) = lex_start_tag(markup, pos);
                pos = next;
                if let Some(tag) = tag {
                    let raw = !tag.self_closing && RAW_TEXT_ELEMENTS.contains(&tag.name.as_str());
                    let name = tag.name.clone();
                    tokens.push(Token::StartTag(tag));
                    if raw {
                        pos = lex_raw_text(markup, pos, &name, &mut tokens);
                    }
                }
            }
            _ => {
                // Stray '<': treat it as literal text
                push_text(&mut tokens, "<");
                pos += 1;
            }
        }
    }

    tokens
}

/// Append a text token, decoding basic character entities
fn push_text(tokens: &mut Vec<Token>, raw: &str) {
    if raw.is_empty() {
        return;
    }
    tokens.push(Token::Text(decode_entities(raw)));
}

fn find_byte(bytes: &[u8], from: usize, needle: u8) -> Option<usize> {
    bytes[from..]
        .iter()
        .position(|&b| b == needle)
        .map(|i| from + i)
}

/// Lex "</name ...>" starting at the '<'. Returns the position after '>'.
fn lex_end_tag(markup: &str, start: usize, tokens: &mut Vec<Token>) -> usize {
    let bytes = markup.as_bytes();
    let mut pos = start + 2;
    let name_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
        pos += 1;
    }
    let name = markup[name_start..pos].to_ascii_lowercase();

    match find_byte(bytes, pos, b'>') {
        Some(gt) => {
            if !name.is_empty() {
                tokens.push(Token::EndTag(name));
            }
            gt + 1
        }
        // Unterminated end tag: ignore it
        None => bytes.len(),
    }
}

/// Skip "<!-- ... -->", "<!DOCTYPE ...>" or "<? ... >" without emitting a token
fn skip_declaration(bytes: &[u8], start: usize) -> usize {
    if bytes[start..].starts_with(b"<!--") {
        let mut pos = start + 4;
        while pos + 2 < bytes.len() {
            if &bytes[pos..pos + 3] == b"-->" {
                return pos + 3;
            }
            pos += 1;
        }
        return bytes.len();
    }
    match find_byte(bytes, start + 1, b'>') {
        Some(gt) => gt + 1,
        None => bytes.len(),
    }
}

/// Lex a start tag beginning at the '<'. Returns the position after '>' and
/// the tag, or `None` for an unterminated tag (which is ignored).
fn lex_start_tag(markup: &str, start: usize) -> (usize, Option<StartTag>) {
    let bytes = markup.as_bytes();
    let mut pos = start + 1;
    let name_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_alphanumeric() {
        pos += 1;
    }
    let name = markup[name_start..pos].to_ascii_lowercase();

    let mut attrs = Vec::new();
    let mut self_closing = false;

    loop {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        match bytes.get(pos).copied() {
            None => return (bytes.len(), None),
            Some(b'>') => {
                pos += 1;
                break;
            }
            Some(b'/') => {
                if bytes.get(pos + 1) == Some(&b'>') {
                    self_closing = true;
                    pos += 2;
                    break;
                }
                pos += 1;
            }
            Some(_) => {
                let Some((next, attr)) = lex_attribute(markup, pos) else {
                    return (bytes.len(), None);
                };
                pos = next;
                if let Some(attr) = attr {
                    attrs.push(attr);
                }
            }
        }
    }

    (
        pos,
        Some(StartTag {
            name,
            attrs,
            self_closing,
        }),
    )
}

/// Lex one `name`, `name="value"`, `name='value'` or `name=value` pair.
/// Returns `None` only when the input ends before the tag is closed.
fn lex_attribute(markup: &str, start: usize) -> Option<(usize, Option<(String, String)>)> {
    let bytes = markup.as_bytes();
    let mut pos = start;
    let name_start = pos;
    while pos < bytes.len() {
        let b = bytes[pos];
        if b.is_ascii_whitespace() || b == b'=' || b == b'>' || b == b'/' {
            break;
        }
        pos += 1;
    }
    if pos >= bytes.len() {
        return None;
    }
    let name = markup[name_start..pos].to_ascii_lowercase();

    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    if bytes.get(pos) != Some(&b'=') {
        // Valueless attribute
        return Some((pos, Some((name, String::new()))));
    }
    pos += 1;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }

    let value = match bytes.get(pos) {
        Some(&q) if q == b'"' || q == b'\'' => {
            pos += 1;
            let value_start = pos;
            let close = find_byte(bytes, pos, q)?;
            pos = close + 1;
            decode_entities(&markup[value_start..close])
        }
        Some(_) => {
            // Unquoted value: scan to whitespace or tag end
            let value_start = pos;
            while pos < bytes.len() {
                let b = bytes[pos];
                if b.is_ascii_whitespace() || b == b'>' || b == b'/' {
                    break;
                }
                pos += 1;
            }
            decode_entities(&markup[value_start..pos])
        }
        None => return None,
    };

    if name.is_empty() {
        return Some((pos, None));
    }
    Some((pos, Some((name, value))))
}

/// Consume the body of a raw-text element up to its matching end tag.
/// The body is emitted as one text event; the end tag event follows.
fn lex_raw_text(markup: &str, start: usize, name: &str, tokens: &mut Vec<Token>) -> usize {
    let closer = format!("</{name}");
    let lower = markup[start..].to_ascii_lowercase();

    let Some(rel) = lower.find(&closer) else {
        push_text(tokens, &markup[start..]);
        return markup.len();
    };
    let body_end = start + rel;
    if body_end > start {
        push_text(tokens, &markup[start..body_end]);
    }
    lex_end_tag(markup, body_end, tokens)
}

/// Decode the basic named and numeric character references.
///
/// Deliberately minimal: the full HTML entity table is out of scope, but
/// `&amp;` and friends are common enough in body text to matter.
fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        // Entity names are short; give up past 9 chars so '&' in prose
        // does not swallow the rest of the line
        let Some(semi) = rest.find(';').filter(|&i| i <= 9) else {
            out.push('&');
            rest = &rest[1..];
            continue;
        };
        let entity = &rest[1..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            _ => entity
                .strip_prefix('#')
                .and_then(|num| {
                    if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
                        u32::from_str_radix(hex, 16).ok()
                    } else {
                        num.parse().ok()
                    }
                })
                .and_then(char::from_u32),
        };
        match decoded {
            Some(c) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(name: &str) -> Token {
        Token::StartTag(StartTag {
            name: name.to_string(),
            attrs: vec![],
            self_closing: false,
        })
    }

    #[test]
    fn test_tokenize_simple_element() {
        let tokens = tokenize("<p>Hello</p>");
        assert_eq!(
            tokens,
            vec![
                start("p"),
                Token::Text("Hello".to_string()),
                Token::EndTag("p".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_quoted_attributes() {
        let tokens = tokenize(r#"<img src="a.png" alt='A photo'/>"#);
        assert_eq!(tokens.len(), 1);
        let Token::StartTag(tag) = &tokens[0] else {
            panic!("expected start tag");
        };
        assert_eq!(tag.name, "img");
        assert_eq!(tag.attr("src"), Some("a.png"));
        assert_eq!(tag.attr("alt"), Some("A photo"));
        assert!(tag.self_closing);
    }

    #[test]
    fn test_tokenize_unquoted_and_valueless_attributes() {
        let tokens = tokenize("<img alt=photo hidden>");
        let Token::StartTag(tag) = &tokens[0] else {
            panic!("expected start tag");
        };
        assert_eq!(tag.attr("alt"), Some("photo"));
        assert_eq!(tag.attr("hidden"), Some(""));
    }

    #[test]
    fn test_tag_names_lowercased() {
        let tokens = tokenize("<H1>Title</H1>");
        assert_eq!(tokens[0], start("h1"));
        assert_eq!(tokens[2], Token::EndTag("h1".to_string()));
    }

    #[test]
    fn test_comments_and_doctype_skipped() {
        let tokens = tokenize("<!DOCTYPE html><!-- a > b --><p>x</p>");
        assert_eq!(tokens[0], start("p"));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_script_body_is_raw_text() {
        let tokens = tokenize("<script>if (a < b) { x = \"<h1>\"; }</script>");
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[1], Token::Text(t) if t.contains("<h1>")));
        assert_eq!(tokens[2], Token::EndTag("script".to_string()));
    }

    #[test]
    fn test_stray_angle_bracket_is_text() {
        let tokens = tokenize("3 < 4");
        let text: String = tokens
            .iter()
            .map(|t| match t {
                Token::Text(s) => s.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(text, "3 < 4");
    }

    #[test]
    fn test_unterminated_tag_ignored() {
        let tokens = tokenize("<p>ok</p><a href=\"x");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_binary_garbage_does_not_panic() {
        let garbage = "\u{0}\u{1}<<<>>>\u{fffd}<p";
        let _ = tokenize(garbage);
    }

    #[test]
    fn test_entity_decoding() {
        let tokens = tokenize("<p>Fish &amp; chips &#233; &#x41;</p>");
        assert_eq!(tokens[1], Token::Text("Fish & chips é A".to_string()));
    }

    #[test]
    fn test_unknown_entity_left_alone() {
        let tokens = tokenize("<p>&bogus; &broken</p>");
        assert_eq!(tokens[1], Token::Text("&bogus; &broken".to_string()));
    }
}
