//! Calendar popup: month grid math, keyboard focus, and placement.
//!
//! `grid` and `focus` are pure state machines with no rendering attached;
//! `popup` orchestrates them and produces a plain-data [`PopupFrame`]
//! for whatever render target the host uses.

mod focus;
mod grid;
mod popup;
mod position;

pub use focus::{FocusController, MoveOutcome};
pub use grid::{
    cell_index_to_date, weekday_labels, CellDate, GridCell, MonthCursor, MonthGrid, GRID_CELLS,
};
pub use popup::{CalendarPopup, CellView, PopupFrame};
pub use position::{
    place_centered, place_near_anchor, AnchorBox, PopupBounds, PopupSize, Viewport, ANCHOR_GAP,
    VIEWPORT_MARGIN,
};
