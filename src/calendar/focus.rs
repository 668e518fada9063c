//! Keyboard focus state machine for the calendar grid.
//!
//! The focused cell is independent of the committed selection: arrows move
//! focus, Enter commits it. Focus can wrap one month backward or forward
//! in a single move; the displayed month follows the focused month
//! whenever a wrap is accepted, so the two never stay diverged.

use chrono::{Datelike, NaiveDate};

use super::grid::{MonthCursor, GRID_CELLS};

/// Result of a focus move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Focus moved within the current month
    Moved,
    /// Focus moved and wrapped into an adjacent month; the display month
    /// must be re-rendered to follow
    Wrapped,
    /// The move would land outside `[1, days_in_month]` of the (possibly
    /// wrapped) target month; focus and display are unchanged.
    /// Directional overshoot beyond one month boundary is not supported
    /// in one move.
    Rejected,
}

/// Keyboard cursor over the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusController {
    /// None until keyboard navigation has touched the grid
    focused_day: Option<u32>,
    focused_month: MonthCursor,
}

impl FocusController {
    pub fn new(month: MonthCursor) -> Self {
        Self {
            focused_day: None,
            focused_month: month,
        }
    }

    /// Place focus on a concrete date (initial focus defaults to the
    /// selected date on first render)
    pub fn seed(&mut self, date: NaiveDate) {
        self.focused_month = MonthCursor::from_date(date);
        self.focused_day = Some(date.day());
    }

    pub fn focused_day(&self) -> Option<u32> {
        self.focused_day
    }

    pub fn focused_month(&self) -> MonthCursor {
        self.focused_month
    }

    /// The focused cell as a concrete date, if any
    pub fn focused_date(&self) -> Option<NaiveDate> {
        self.focused_month.date(self.focused_day?)
    }

    /// Linear grid index of the focused cell, when the given display month
    /// matches the focused month
    pub fn grid_index(&self, display: MonthCursor, first_day_of_week: u8) -> Option<usize> {
        if display != self.focused_month {
            return None;
        }
        let day = self.focused_day?;
        let index = (self.focused_month.starting_offset(first_day_of_week) + day - 1) as usize;
        (index < GRID_CELLS).then_some(index)
    }

    /// Move focus by `(dx, dy)` grid cells; `dy` counts whole weeks.
    ///
    /// The current focus maps to a linear position
    /// `starting_offset + day - 1` (0 when unset). A resulting position
    /// below 0 wraps to the previous month by adding its day count, keeping
    /// the pre-wrap month's starting offset in the day formula - that is
    /// what makes "left from day 1" land on the last day of the previous
    /// month. A position at or past 42 wraps forward by subtracting 42.
    /// The final day is accepted only inside `[1, days_in_month]` of the
    /// target month.
    pub fn move_focus(&mut self, dx: i32, dy: i32, first_day_of_week: u8) -> MoveOutcome {
        let start = self.focused_month.starting_offset(first_day_of_week) as i32;
        let pos = match self.focused_day {
            Some(day) => start + day as i32 - 1,
            None => 0,
        };

        let mut new_pos = pos + dx + dy * 7;
        let mut target = self.focused_month;
        let mut wrapped = false;

        if new_pos < 0 {
            target = target.prev();
            new_pos += target.days_in_month() as i32;
            wrapped = true;
        } else if new_pos >= GRID_CELLS as i32 {
            target = target.next();
            new_pos -= GRID_CELLS as i32;
            wrapped = true;
        }

        let day = new_pos - start + 1;
        if day >= 1 && day <= target.days_in_month() as i32 {
            self.focused_month = target;
            self.focused_day = Some(day as u32);
            if wrapped {
                MoveOutcome::Wrapped
            } else {
                MoveOutcome::Moved
            }
        } else {
            MoveOutcome::Rejected
        }
    }
}
