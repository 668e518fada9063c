//! Calendar popup orchestrator.
//!
//! Owns the displayed month, the selected date, and the keyboard focus
//! controller; consumes [`PopupMsg`] events and produces a [`PopupFrame`]
//! snapshot for the host's render target. Committing (pointer click or
//! Enter) closes the popup and hands the formatted date string to the
//! `on_choose` callback, which fires at most once per popup lifetime.

use chrono::NaiveDate;

use crate::config::DatePickerSettings;
use crate::date::render_committed;
use crate::messages::PopupMsg;

use super::focus::{FocusController, MoveOutcome};
use super::grid::{cell_index_to_date, weekday_labels, MonthCursor, MonthGrid};
use super::position::{place_centered, place_near_anchor, AnchorBox, PopupBounds, PopupSize, Viewport};

/// Commit callback: receives the formatted (possibly markup-wrapped) date
pub type OnChoose = Box<dyn FnOnce(String)>;

/// One cell of the rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub day: u32,
    pub adjacent: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_focused: bool,
}

/// Plain-data snapshot of everything the host needs to draw the popup
#[derive(Debug, Clone)]
pub struct PopupFrame {
    /// Header label, e.g. "January 2024"
    pub title: String,
    /// Weekday row, permuted by `first_day_of_week`
    pub weekday_labels: [&'static str; 7],
    /// The 42 grid cells in layout order
    pub cells: Vec<CellView>,
    /// Linear index of the keyboard-focused cell, if visible
    pub focused_index: Option<usize>,
    /// Where to draw, when the popup has been positioned
    pub bounds: Option<PopupBounds>,
}

/// Interactive calendar popup
pub struct CalendarPopup {
    settings: DatePickerSettings,
    today: NaiveDate,
    selected: NaiveDate,
    display: MonthCursor,
    focus: FocusController,
    size: PopupSize,
    bounds: Option<PopupBounds>,
    is_open: bool,
    on_choose: Option<OnChoose>,
}

impl std::fmt::Debug for CalendarPopup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarPopup")
            .field("selected", &self.selected)
            .field("display", &self.display)
            .field("is_open", &self.is_open)
            .field("committed", &self.on_choose.is_none())
            .finish()
    }
}

impl CalendarPopup {
    /// Create a popup selecting `today`, with a commit callback.
    ///
    /// `size` is the measured pixel size of the rendered popup, used only
    /// for placement.
    pub fn new(
        settings: DatePickerSettings,
        today: NaiveDate,
        size: PopupSize,
        on_choose: impl FnOnce(String) + 'static,
    ) -> Self {
        let display = MonthCursor::from_date(today);
        Self {
            settings,
            today,
            selected: today,
            display,
            focus: FocusController::new(display),
            size,
            bounds: None,
            is_open: false,
            on_choose: Some(Box::new(on_choose)),
        }
    }

    /// Seed the popup with an existing date (editing an existing token)
    pub fn with_selected(mut self, date: NaiveDate) -> Self {
        self.selected = date;
        self.display = MonthCursor::from_date(date);
        self.focus = FocusController::new(self.display);
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn display_month(&self) -> MonthCursor {
        self.display
    }

    pub fn bounds(&self) -> Option<PopupBounds> {
        self.bounds
    }

    /// Open centered in the viewport. Idempotent: reopening recenters.
    pub fn open(&mut self, viewport: Viewport) {
        self.is_open = true;
        self.bounds = Some(place_centered(self.size, viewport));
        self.seed_focus();
    }

    /// Position near an anchor (caret box or click point). Invalid anchors
    /// are a no-op: the popup stays wherever it was.
    pub fn position_near_coords(&mut self, anchor: &AnchorBox, viewport: Viewport) {
        match place_near_anchor(self.size, anchor, viewport) {
            Some(bounds) => self.bounds = Some(bounds),
            None => {
                tracing::debug!("Invalid anchor coordinates: {:?}", anchor);
            }
        }
    }

    /// Close without committing
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Show an adjacent month (+1 / -1). Focus is untouched; the focused
    /// cell simply stops being visible until the months line up again.
    pub fn navigate_month(&mut self, delta: i32) {
        self.display = self.display.shifted(delta);
    }

    /// Apply one input event. Returns `true` when the host should redraw.
    pub fn update(&mut self, msg: PopupMsg) -> bool {
        if !self.is_open {
            return false;
        }
        match msg {
            PopupMsg::MoveFocus(direction) => {
                let (dx, dy) = direction.delta();
                match self.focus.move_focus(dx, dy, self.settings.first_day_of_week) {
                    MoveOutcome::Moved => true,
                    MoveOutcome::Wrapped => {
                        // Display follows focus across the month boundary
                        self.display = self.focus.focused_month();
                        true
                    }
                    MoveOutcome::Rejected => false,
                }
            }
            PopupMsg::Activate => {
                if let Some(date) = self.focus.focused_date() {
                    self.commit(date);
                    true
                } else {
                    false
                }
            }
            PopupMsg::Close => {
                self.close();
                true
            }
            PopupMsg::NavigateMonth(delta) => {
                self.navigate_month(delta);
                true
            }
            PopupMsg::CellClicked(index) => {
                let cell =
                    cell_index_to_date(self.display, self.settings.first_day_of_week, index);
                match cell.and_then(|c| c.date()) {
                    Some(date) => {
                        self.commit(date);
                        true
                    }
                    None => {
                        tracing::debug!("Click on unmapped cell index {}", index);
                        false
                    }
                }
            }
            PopupMsg::OutsideClick { x, y } => {
                let inside = self.bounds.is_some_and(|b| b.contains(x, y));
                if inside {
                    false
                } else {
                    self.close();
                    true
                }
            }
        }
    }

    /// Render snapshot, or `None` while closed
    pub fn frame(&self) -> Option<PopupFrame> {
        if !self.is_open {
            return None;
        }
        let fdow = self.settings.first_day_of_week;
        let grid = MonthGrid::compute(self.display, fdow, Some(self.selected), self.today);
        let focused_index = self.focus.grid_index(self.display, fdow);
        let cells = grid
            .cells()
            .iter()
            .enumerate()
            .map(|(i, c)| CellView {
                day: c.day,
                adjacent: c.adjacent,
                is_today: c.is_today,
                is_selected: c.is_selected,
                is_focused: focused_index == Some(i),
            })
            .collect();
        Some(PopupFrame {
            title: self.display.title(),
            weekday_labels: weekday_labels(fdow),
            cells,
            focused_index,
            bounds: self.bounds,
        })
    }

    /// First render places keyboard focus on the selected date
    fn seed_focus(&mut self) {
        if self.focus.focused_day().is_none() {
            self.focus.seed(self.selected);
        }
    }

    /// Commit a chosen date: close, then fire the callback exactly once
    fn commit(&mut self, date: NaiveDate) {
        self.selected = date;
        self.close();
        if let Some(on_choose) = self.on_choose.take() {
            on_choose(render_committed(date, &self.settings));
        }
    }
}
