//! Token insertion and in-place replacement.
//!
//! Committing a date from the popup either inserts text at the caret or,
//! when the popup was opened from an existing styled token, replaces that
//! token in place. When several tokens carry the same date the one
//! closest to the caret is replaced.

use std::ops::Range;

use crate::commands::Cmd;
use crate::date::{to_iso, wrap_styled};
use crate::editable::{Position, TextBufferMut};

use super::scan::{scan_buffer, scan_line, TOKEN_CLOSE};

/// Delay before the deferred caret move, in milliseconds
const CARET_REPOSITION_DELAY_MS: u64 = 10;

/// Caret offset past a styled token's closing tag after insertion
const CARET_PAST_CLOSE: usize = 8;

/// Result of inserting committed text at the caret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Where the caret should end up
    pub caret: Position,
    /// Deferred caret move for styled inserts; the host schedules it
    pub deferred: Option<Cmd>,
}

/// Insert committed text at the caret position, with a trailing space so
/// typing continues past the token.
///
/// Plain text puts the caret right after the space. Styled markup
/// additionally schedules a deferred reposition, since the host's markup
/// reflow lags the edit.
pub fn insert_at_caret(
    buffer: &mut impl TextBufferMut,
    text: &str,
    caret: Position,
) -> InsertOutcome {
    let offset = buffer.position_to_offset(caret.line, caret.column);
    buffer.insert(offset, text);
    buffer.insert(offset + text.chars().count(), " ");

    match text.find(TOKEN_CLOSE) {
        Some(close_byte) => {
            let close_chars = text[..close_byte].chars().count();
            let column = (caret.column + close_chars + CARET_PAST_CLOSE)
                .min(buffer.line_length(caret.line));
            let position = Position::new(caret.line, column);
            InsertOutcome {
                caret: position,
                deferred: Some(Cmd::RepositionCaret {
                    position,
                    delay_ms: CARET_REPOSITION_DELAY_MS,
                }),
            }
        }
        None => InsertOutcome {
            caret: Position::new(caret.line, caret.column + text.chars().count() + 1),
            deferred: None,
        },
    }
}

/// Replace the styled token with date `old_iso` nearest to the caret.
///
/// Distance is measured between the caret and each token's start; ties go
/// to the earliest token in the buffer. Returns the char range now holding
/// the replacement, or `None` (logged, no edit) when no token matches.
pub fn replace_nearest(
    buffer: &mut impl TextBufferMut,
    old_iso: &str,
    replacement: &str,
    caret: Position,
) -> Option<Range<usize>> {
    let caret_offset = buffer.position_to_offset(caret.line, caret.column);

    let mut best: Option<(usize, usize)> = None;
    for token in scan_buffer(buffer) {
        if token.span.iso.as_deref() != Some(old_iso) {
            continue;
        }
        let start = buffer.position_to_offset(token.line, token.span.start);
        let distance = caret_offset.abs_diff(start);
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, start));
        }
    }

    let Some((_, start)) = best else {
        tracing::debug!("No styled token with date {} to replace", old_iso);
        return None;
    };

    let (line, column) = buffer.offset_to_position(start);
    let span_len = buffer
        .line(line)
        .and_then(|text| {
            scan_line(&text)
                .into_iter()
                .find(|span| span.start == column)
                .map(|span| span.len())
        })?;

    buffer.replace(start..start + span_len, replacement);
    Some(start..start + replacement.chars().count())
}

/// Strip styled markup, keeping each token's visible label
pub fn strip_tags(text: &str) -> String {
    let spans = scan_line(text);
    if spans.is_empty() {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut cursor = 0;
    for span in spans {
        out.extend(&chars[cursor..span.start]);
        out.push_str(&span.text);
        cursor = span.end;
    }
    out.extend(&chars[cursor..]);
    out
}

/// Re-commit a date over an existing token: strip the committed markup,
/// derive the canonical date, re-wrap, and swap the nearest old token.
pub fn repick_date(
    buffer: &mut impl TextBufferMut,
    old_iso: &str,
    committed: &str,
    pattern: &str,
    caret: Position,
) -> Option<Range<usize>> {
    let label = strip_tags(committed);
    let iso = to_iso(&label, pattern);
    let styled = wrap_styled(&label, &iso);
    replace_nearest(buffer, old_iso, &styled, caret)
}
