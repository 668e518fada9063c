//! Atomic editing behavior for styled date tokens.
//!
//! A styled token behaves as a single character: backspace at its right
//! edge deletes the whole token, and arrow keys first highlight the
//! token, then step over it, instead of landing inside the markup.

use crate::editable::{Position, Selection, TextBuffer};
use crate::messages::Direction;

use super::scan::{scan_line, TokenSpan};

/// The token currently highlighted by keyboard navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightedToken {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl HighlightedToken {
    fn selection(&self) -> Selection {
        Selection::new(
            Position::new(self.line, self.start),
            Position::new(self.line, self.end),
        )
    }
}

/// What the host should do with an arrow key near a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKeyAction {
    /// Select the whole token instead of moving the caret
    HighlightToken { selection: Selection },
    /// Collapse the highlight and place the caret past the token
    ExitToken { caret: Position },
    /// Drop the highlight; the host applies its normal caret movement
    ReleaseHighlight,
    /// No token involvement; normal editing
    Pass,
}

/// Tracks at most one highlighted token per editor
#[derive(Debug, Default)]
pub struct AtomicDateTokens {
    highlight: Option<HighlightedToken>,
}

impl AtomicDateTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlight(&self) -> Option<HighlightedToken> {
        self.highlight
    }

    /// Escape, outside clicks, and programmatic caret moves all drop the
    /// highlight
    pub fn clear(&mut self) {
        self.highlight = None;
    }

    /// Drop the highlight when the host's selection no longer matches it
    pub fn sync_selection(&mut self, selection: Option<Selection>) {
        if let Some(token) = self.highlight {
            if selection != Some(token.selection()) {
                self.highlight = None;
            }
        }
    }

    /// Backspace with the caret at a token's right edge returns the span
    /// the host should select; the next delete removes it atomically
    /// (`has_selection` is then true, so that delete passes through here).
    pub fn on_backspace(
        &mut self,
        buffer: &impl TextBuffer,
        caret: Position,
        has_selection: bool,
    ) -> Option<Selection> {
        if has_selection {
            return None;
        }
        let token = token_ending_at(buffer, caret)?;
        self.highlight = None;
        Some(
            HighlightedToken {
                line: caret.line,
                start: token.start,
                end: token.end,
            }
            .selection(),
        )
    }

    /// Arrow key handling. Order matters: an active highlight is resolved
    /// first, then boundary entry, then pass-through.
    pub fn on_arrow(
        &mut self,
        buffer: &impl TextBuffer,
        caret: Position,
        direction: Direction,
    ) -> TokenKeyAction {
        if let Some(token) = self.highlight.take() {
            return match direction {
                Direction::Left => TokenKeyAction::ExitToken {
                    caret: Position::new(token.line, token.start.saturating_sub(1)),
                },
                Direction::Right => {
                    let limit = buffer.line_length(token.line);
                    TokenKeyAction::ExitToken {
                        caret: Position::new(token.line, (token.end + 1).min(limit)),
                    }
                }
                Direction::Up | Direction::Down => TokenKeyAction::ReleaseHighlight,
            };
        }

        let (Direction::Left | Direction::Right) = direction else {
            return TokenKeyAction::Pass;
        };

        let Some(line) = buffer.line(caret.line) else {
            return TokenKeyAction::Pass;
        };
        let entering = scan_line(&line).into_iter().find(|span| match direction {
            Direction::Left => caret.column == span.end || span.contains_column(caret.column),
            Direction::Right => caret.column == span.start || span.contains_column(caret.column),
            _ => false,
        });
        match entering {
            Some(span) => {
                let token = HighlightedToken {
                    line: caret.line,
                    start: span.start,
                    end: span.end,
                };
                self.highlight = Some(token);
                TokenKeyAction::HighlightToken {
                    selection: token.selection(),
                }
            }
            None => TokenKeyAction::Pass,
        }
    }
}

/// Token whose span ends exactly at the caret column
fn token_ending_at(buffer: &impl TextBuffer, caret: Position) -> Option<TokenSpan> {
    let line = buffer.line(caret.line)?;
    scan_line(&line)
        .into_iter()
        .find(|span| span.end == caret.column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::StringBuffer;

    const TOKEN: &str =
        "<span class=\"styled-date\" data-date=\"2024-01-15\">2024-01-15</span>";

    fn buffer_with_token() -> (StringBuffer, usize, usize) {
        let text = format!("pay rent {TOKEN} soon");
        let start = 9;
        let end = start + TOKEN.chars().count();
        (StringBuffer::from_text(&text), start, end)
    }

    #[test]
    fn test_backspace_at_token_edge_selects_whole_token() {
        let (buffer, start, end) = buffer_with_token();
        let mut tokens = AtomicDateTokens::new();
        let selection = tokens
            .on_backspace(&buffer, Position::new(0, end), false)
            .unwrap();
        assert_eq!(selection.start(), Position::new(0, start));
        assert_eq!(selection.end(), Position::new(0, end));
    }

    #[test]
    fn test_backspace_elsewhere_passes_through() {
        let (buffer, _, end) = buffer_with_token();
        let mut tokens = AtomicDateTokens::new();
        assert!(tokens
            .on_backspace(&buffer, Position::new(0, end - 1), false)
            .is_none());
        assert!(tokens
            .on_backspace(&buffer, Position::new(0, 3), false)
            .is_none());
    }

    #[test]
    fn test_backspace_with_active_selection_passes_through() {
        let (buffer, _, end) = buffer_with_token();
        let mut tokens = AtomicDateTokens::new();
        assert!(tokens
            .on_backspace(&buffer, Position::new(0, end), true)
            .is_none());
    }

    #[test]
    fn test_arrow_left_at_edge_highlights_then_exits() {
        let (buffer, start, end) = buffer_with_token();
        let mut tokens = AtomicDateTokens::new();

        let action = tokens.on_arrow(&buffer, Position::new(0, end), Direction::Left);
        let TokenKeyAction::HighlightToken { selection } = action else {
            panic!("expected highlight, got {action:?}");
        };
        assert_eq!(selection.start(), Position::new(0, start));
        assert!(tokens.highlight().is_some());

        let action = tokens.on_arrow(&buffer, Position::new(0, start), Direction::Left);
        assert_eq!(
            action,
            TokenKeyAction::ExitToken {
                caret: Position::new(0, start - 1)
            }
        );
        assert!(tokens.highlight().is_none());
    }

    #[test]
    fn test_arrow_right_at_start_highlights_then_exits() {
        let (buffer, start, end) = buffer_with_token();
        let mut tokens = AtomicDateTokens::new();

        let action = tokens.on_arrow(&buffer, Position::new(0, start), Direction::Right);
        assert!(matches!(action, TokenKeyAction::HighlightToken { .. }));

        let action = tokens.on_arrow(&buffer, Position::new(0, end), Direction::Right);
        assert_eq!(
            action,
            TokenKeyAction::ExitToken {
                caret: Position::new(0, end + 1)
            }
        );
    }

    #[test]
    fn test_exit_left_saturates_at_line_start() {
        let buffer = StringBuffer::from_text(TOKEN);
        let mut tokens = AtomicDateTokens::new();
        let end = TOKEN.chars().count();

        tokens.on_arrow(&buffer, Position::new(0, end), Direction::Left);
        let action = tokens.on_arrow(&buffer, Position::new(0, 0), Direction::Left);
        assert_eq!(
            action,
            TokenKeyAction::ExitToken {
                caret: Position::new(0, 0)
            }
        );
    }

    #[test]
    fn test_exit_right_clamps_to_line_length() {
        let buffer = StringBuffer::from_text(TOKEN);
        let mut tokens = AtomicDateTokens::new();
        let end = TOKEN.chars().count();

        tokens.on_arrow(&buffer, Position::new(0, 0), Direction::Right);
        let action = tokens.on_arrow(&buffer, Position::new(0, end), Direction::Right);
        assert_eq!(
            action,
            TokenKeyAction::ExitToken {
                caret: Position::new(0, end)
            }
        );
    }

    #[test]
    fn test_vertical_arrow_releases_highlight() {
        let (buffer, _, end) = buffer_with_token();
        let mut tokens = AtomicDateTokens::new();
        tokens.on_arrow(&buffer, Position::new(0, end), Direction::Left);
        let action = tokens.on_arrow(&buffer, Position::new(0, end), Direction::Up);
        assert_eq!(action, TokenKeyAction::ReleaseHighlight);
        assert!(tokens.highlight().is_none());
    }

    #[test]
    fn test_arrow_far_from_token_passes() {
        let (buffer, _, _) = buffer_with_token();
        let mut tokens = AtomicDateTokens::new();
        assert_eq!(
            tokens.on_arrow(&buffer, Position::new(0, 2), Direction::Right),
            TokenKeyAction::Pass
        );
    }

    #[test]
    fn test_foreign_selection_drops_highlight() {
        let (buffer, _, end) = buffer_with_token();
        let mut tokens = AtomicDateTokens::new();
        tokens.on_arrow(&buffer, Position::new(0, end), Direction::Left);
        assert!(tokens.highlight().is_some());

        tokens.sync_selection(Some(Selection::collapsed(Position::new(0, 1))));
        assert!(tokens.highlight().is_none());
    }
}
