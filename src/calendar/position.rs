//! Popup placement math.
//!
//! Pure functions mapping an anchor box and viewport to popup bounds:
//! below the anchor with a fixed gap, flipping above when the viewport
//! bottom would be overflowed, clamped against the right edge and the
//! minimum margins. All synchronous and idempotent - calling them again
//! simply repositions.

/// Gap between the anchor edge and the popup, in pixels
pub const ANCHOR_GAP: f32 = 5.0;

/// Minimum distance from viewport edges, in pixels
pub const VIEWPORT_MARGIN: f32 = 5.0;

/// Host viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Rectangle the popup is anchored to (caret coordinates or a click point)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorBox {
    pub left: f32,
    pub top: f32,
    pub bottom: f32,
}

impl AnchorBox {
    /// Anchor at a single point (pointer click)
    pub fn point(x: f32, y: f32) -> Self {
        Self {
            left: x,
            top: y,
            bottom: y,
        }
    }

    /// Anchor below a rectangle (caret box)
    pub fn rect(left: f32, top: f32, bottom: f32) -> Self {
        Self { left, top, bottom }
    }

    /// Anchors built from missing or garbage host coordinates are unusable
    pub fn is_valid(&self) -> bool {
        self.left.is_finite() && self.top.is_finite() && self.bottom.is_finite()
    }
}

/// Popup dimensions as measured by the host's render target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupSize {
    pub width: f32,
    pub height: f32,
}

/// Computed popup bounds (viewport coordinates)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PopupBounds {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Hit test for outside-click detection
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Place the popup near an anchor.
///
/// Below the anchor's bottom edge with a fixed gap; flipped above the
/// anchor's top edge when the viewport bottom would overflow; top clamped
/// to the minimum margin; horizontally clamped so the popup neither
/// overflows the right edge nor sits left of the minimum margin.
///
/// Returns `None` for invalid anchor coordinates - callers treat that as
/// a no-op, leaving the popup wherever it was.
pub fn place_near_anchor(
    size: PopupSize,
    anchor: &AnchorBox,
    viewport: Viewport,
) -> Option<PopupBounds> {
    if !anchor.is_valid() {
        return None;
    }

    let mut top = anchor.bottom + ANCHOR_GAP;
    if top + size.height > viewport.height {
        top = anchor.top - size.height - ANCHOR_GAP;
    }
    if top < VIEWPORT_MARGIN {
        top = VIEWPORT_MARGIN;
    }

    let mut left = anchor.left;
    if left + size.width > viewport.width {
        left = (viewport.width - size.width - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    }
    if left < VIEWPORT_MARGIN {
        left = VIEWPORT_MARGIN;
    }

    Some(PopupBounds {
        x: left,
        y: top,
        width: size.width,
        height: size.height,
    })
}

/// Center the popup in the viewport (anchorless `open()`)
pub fn place_centered(size: PopupSize, viewport: Viewport) -> PopupBounds {
    PopupBounds {
        x: viewport.width / 2.0 - size.width / 2.0,
        y: viewport.height / 2.0 - size.height / 2.0,
        width: size.width,
        height: size.height,
    }
}
