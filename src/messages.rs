//! Message types for the popup's Elm-style update loop
//!
//! The host translates its input events (keydown, pointer) into these
//! messages and feeds them to [`crate::calendar::CalendarPopup::update`].

/// Direction for keyboard focus movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid-space delta `(dx, dy)` for this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Popup-specific messages (keyboard navigation, pointer selection)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PopupMsg {
    /// Move keyboard focus one cell (arrow keys)
    MoveFocus(Direction),
    /// Commit the focused cell (Enter)
    Activate,
    /// Close without committing (Escape)
    Close,
    /// Show the previous/next month (header buttons); +1 or -1
    NavigateMonth(i32),
    /// Pointer click on a grid cell, by linear cell index 0..42
    CellClicked(usize),
    /// Pointer down outside the popup's rendered bounds
    OutsideClick { x: f32, y: f32 },
}
