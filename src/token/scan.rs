//! Hand-written scanner for styled date tokens.
//!
//! Tokens are inline markup of the form
//! `<span class="styled-date" data-date="2024-01-15">Jan 15</span>`.
//! The scanner walks line text directly instead of going through a
//! pattern engine; all reported offsets are character offsets so they
//! compose with [`TextBuffer`] positions.

use crate::editable::TextBuffer;

/// Opening fragment every styled date token starts with
pub const TOKEN_OPEN: &str = "<span class=\"styled-date\"";

/// Closing tag ending every styled date token
pub const TOKEN_CLOSE: &str = "</span>";

/// One styled date token found in a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    /// Char offset of `<` within the line
    pub start: usize,
    /// Char offset one past the final `>` of the closing tag
    pub end: usize,
    /// Visible label between the tags
    pub text: String,
    /// Value of the `data-date` attribute, when present
    pub iso: Option<String>,
}

impl TokenSpan {
    /// Length of the whole token in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether a caret column sits strictly inside the token
    pub fn contains_column(&self, column: usize) -> bool {
        column > self.start && column < self.end
    }
}

/// A token located in a multi-line buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferToken {
    pub line: usize,
    pub span: TokenSpan,
}

/// Scan one line for styled date tokens, leftmost first.
///
/// Malformed fragments (an opening tag with no closing tag) are skipped;
/// tokens never overlap.
pub fn scan_line(line: &str) -> Vec<TokenSpan> {
    let mut spans = Vec::new();
    let mut search_from = 0;

    while let Some(rel) = line[search_from..].find(TOKEN_OPEN) {
        let open_byte = search_from + rel;
        let rest = &line[open_byte..];

        let Some(tag_end) = rest.find('>') else {
            break;
        };
        let Some(close_rel) = rest[tag_end..].find(TOKEN_CLOSE) else {
            search_from = open_byte + TOKEN_OPEN.len();
            continue;
        };
        let close_byte = tag_end + close_rel;
        let end_byte = open_byte + close_byte + TOKEN_CLOSE.len();

        let open_tag = &rest[..tag_end + 1];
        let text = rest[tag_end + 1..close_byte].to_string();

        spans.push(TokenSpan {
            start: char_offset(line, open_byte),
            end: char_offset(line, end_byte),
            text,
            iso: extract_data_date(open_tag),
        });
        search_from = end_byte;
    }

    spans
}

/// Scan every line of a buffer for styled date tokens
pub fn scan_buffer(buffer: &impl TextBuffer) -> Vec<BufferToken> {
    let mut tokens = Vec::new();
    for line in 0..buffer.line_count() {
        let Some(text) = buffer.line(line) else {
            continue;
        };
        for span in scan_line(&text) {
            tokens.push(BufferToken { line, span });
        }
    }
    tokens
}

/// Token whose span covers the given caret column, if any
pub fn token_at_column(line: &str, column: usize) -> Option<TokenSpan> {
    scan_line(line)
        .into_iter()
        .find(|span| column >= span.start && column <= span.end)
}

/// Pull the `data-date` value out of an opening tag, accepting either
/// quote style
fn extract_data_date(open_tag: &str) -> Option<String> {
    let attr_start = open_tag.find("data-date=")? + "data-date=".len();
    let rest = &open_tag[attr_start..];
    let quote = rest.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    let value = &rest[quote.len_utf8()..];
    let end = value.find(quote)?;
    Some(value[..end].to_string())
}

/// Byte offset to char offset within a line
fn char_offset(line: &str, byte: usize) -> usize {
    line[..byte].chars().count()
}
