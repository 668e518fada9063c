//! Styled date tokens: scanning, atomic editing, and replacement.
//!
//! A token is the inline markup emitted by a styled commit (see
//! [`crate::date::wrap_styled`]). This module finds tokens in buffer text,
//! makes them behave as single units under backspace and arrow keys, and
//! swaps them in place when a date is re-picked.

mod atomic;
mod replace;
mod scan;

pub use atomic::{AtomicDateTokens, HighlightedToken, TokenKeyAction};
pub use replace::{insert_at_caret, repick_date, replace_nearest, strip_tags, InsertOutcome};
pub use scan::{scan_buffer, scan_line, token_at_column, BufferToken, TokenSpan, TOKEN_CLOSE, TOKEN_OPEN};

use chrono::NaiveDate;

use crate::date::{classify_iso, Urgency};
use crate::editable::TextBuffer;

/// A token together with its urgency class for decoration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedToken {
    pub token: BufferToken,
    pub urgency: Urgency,
}

/// Scan the whole buffer and classify each dated token against `today`.
///
/// Tokens without a parseable `data-date` are skipped; the host decorates
/// each returned span with the urgency's CSS class.
pub fn classify_buffer_tokens(
    buffer: &impl TextBuffer,
    today: NaiveDate,
) -> Vec<ClassifiedToken> {
    scan_buffer(buffer)
        .into_iter()
        .filter_map(|token| {
            let iso = token.span.iso.as_deref()?;
            let urgency = classify_iso(iso, today)?;
            Some(ClassifiedToken { token, urgency })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::{RopeBuffer, StringBuffer};

    fn styled(iso: &str) -> String {
        format!("<span class=\"styled-date\" data-date=\"{iso}\">{iso}</span>")
    }

    #[test]
    fn test_classify_buffer_tokens_by_urgency() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let text = format!(
            "{}\n{}\n{}",
            styled("2024-06-01"),
            styled("2024-06-15"),
            styled("2024-12-31"),
        );
        let buffer = RopeBuffer::from_text(&text);

        let classified = classify_buffer_tokens(&buffer, today);
        assert_eq!(classified.len(), 3);
        assert_eq!(classified[0].urgency, Urgency::Neutral);
        assert_eq!(classified[1].urgency, Urgency::Urgent);
        assert_eq!(classified[2].urgency, Urgency::Neutral);
    }

    #[test]
    fn test_unparseable_dates_are_skipped() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let buffer = StringBuffer::from_text(&styled("not-a-date"));
        assert!(classify_buffer_tokens(&buffer, today).is_empty());
    }
}
