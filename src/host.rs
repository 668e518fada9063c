//! Host integration: resolving caret coordinates for popup placement.
//!
//! Hosts that can measure the rendered caret implement
//! [`PreciseCaretCoords`]. Hosts that cannot fall back to
//! [`ApproximateCaretCoords`], a monospace estimate from the editor's
//! outer geometry. Both produce an [`AnchorBox`] in viewport pixels.

use crate::calendar::AnchorBox;
use crate::editable::{Position, TextBuffer};

/// Measured caret geometry from the host's renderer
pub trait PreciseCaretCoords {
    /// Pixel box of the caret, or `None` when the host cannot measure it
    /// (caret scrolled out of the rendered region, layout in flight)
    fn caret_coords(&self, caret: Position) -> Option<AnchorBox>;
}

/// Monospace caret estimate from editor geometry.
///
/// Line height is derived from the editor's height over its line count,
/// the same way a host without layout access would eyeball it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateCaretCoords {
    /// Top-left of the editor's text area in viewport pixels
    pub origin_x: f32,
    pub origin_y: f32,
    /// Height of the editor's text area in pixels
    pub editor_height: f32,
    /// Advance width per character
    pub char_width: f32,
}

impl ApproximateCaretCoords {
    pub fn new(origin_x: f32, origin_y: f32, editor_height: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            editor_height,
            char_width: 8.0,
        }
    }

    /// Estimate the caret box for a buffer position
    pub fn estimate(&self, buffer: &impl TextBuffer, caret: Position) -> AnchorBox {
        let lines = buffer.line_count().max(1) as f32;
        let line_height = self.editor_height / lines;
        let left = self.origin_x + caret.column as f32 * self.char_width;
        let top = self.origin_y + caret.line as f32 * line_height;
        AnchorBox::rect(left, top, top + line_height)
    }
}

/// Resolve an anchor for the popup: measured coordinates when the host can
/// provide them, the estimate otherwise
pub fn resolve_caret_anchor(
    precise: Option<&dyn PreciseCaretCoords>,
    fallback: &ApproximateCaretCoords,
    buffer: &impl TextBuffer,
    caret: Position,
) -> AnchorBox {
    if let Some(host) = precise {
        if let Some(anchor) = host.caret_coords(caret) {
            return anchor;
        }
        tracing::debug!("Host caret measurement unavailable, estimating");
    }
    fallback.estimate(buffer, caret)
}
