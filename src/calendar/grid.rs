//! Pure month-grid math.
//!
//! A displayed month is always laid out as 42 cells (6 weeks of 7 days):
//! trailing days of the previous month, the current month, then leading
//! days of the next month. Everything here is a pure function of
//! `(year, month, first_day_of_week)` and safe to recompute on every
//! render and focus move.

use chrono::{Datelike, NaiveDate};

use crate::date::MONTH_NAMES;

/// Number of cells in the month grid (6 weeks)
pub const GRID_CELLS: usize = 42;

/// Weekday labels in Sunday-first order
const DAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A `(year, month)` pair with 0-based months and explicit rollover at the
/// 0/11 boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// 0 = January .. 11 = December
    pub month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Self {
        Self {
            year,
            month0: month0.min(11),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// The month before this one (December of the prior year after January)
    pub fn prev(self) -> Self {
        if self.month0 == 0 {
            Self {
                year: self.year - 1,
                month0: 11,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 - 1,
            }
        }
    }

    /// The month after this one (January of the next year after December)
    pub fn next(self) -> Self {
        if self.month0 == 11 {
            Self {
                year: self.year + 1,
                month0: 0,
            }
        } else {
            Self {
                year: self.year,
                month0: self.month0 + 1,
            }
        }
    }

    /// Shift by a number of months in either direction
    pub fn shifted(self, delta: i32) -> Self {
        let mut cursor = self;
        for _ in 0..delta.unsigned_abs() {
            cursor = if delta < 0 { cursor.prev() } else { cursor.next() };
        }
        cursor
    }

    /// Days in this month (Gregorian, leap-aware)
    pub fn days_in_month(self) -> u32 {
        let next = self.next();
        NaiveDate::from_ymd_opt(next.year, next.month0 + 1, 1)
            .and_then(|d| d.pred_opt())
            .map_or(30, |d| d.day())
    }

    /// Weekday of the 1st of this month, 0 = Sunday .. 6 = Saturday
    pub fn weekday_of_first(self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
            .map_or(0, |d| d.weekday().num_days_from_sunday())
    }

    /// Grid cell index where day 1 of this month lands:
    /// `(weekday_of_first - first_day_of_week + 7) mod 7`
    pub fn starting_offset(self, first_day_of_week: u8) -> u32 {
        (self.weekday_of_first() + 7 - u32::from(first_day_of_week)) % 7
    }

    /// Concrete date for a day of this month, if it exists
    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }

    /// Header label, e.g. "January 2024"
    pub fn title(self) -> String {
        format!("{} {}", MONTH_NAMES[self.month0 as usize], self.year)
    }
}

/// One derived grid cell. Recomputed on every render, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub day: u32,
    pub year: i32,
    pub month0: u32,
    /// Cell belongs to the previous or next month
    pub adjacent: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

impl GridCell {
    /// Concrete date of this cell
    pub fn date(&self) -> Option<NaiveDate> {
        MonthCursor::new(self.year, self.month0).date(self.day)
    }
}

/// The date a linear cell index maps to (inverse of the grid layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDate {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
    pub adjacent: bool,
}

impl CellDate {
    pub fn date(&self) -> Option<NaiveDate> {
        MonthCursor::new(self.year, self.month0).date(self.day)
    }
}

/// A computed 42-cell month grid
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub month: MonthCursor,
    pub first_day_of_week: u8,
    cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Compute the grid for a month.
    ///
    /// `selected` and `today` only drive the cell flags; they may be any
    /// dates (flags are set only on current-month cells).
    pub fn compute(
        month: MonthCursor,
        first_day_of_week: u8,
        selected: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let start = month.starting_offset(first_day_of_week);
        let days = month.days_in_month();
        let prev = month.prev();
        let next = month.next();
        let days_in_prev = prev.days_in_month();

        let mut cells = Vec::with_capacity(GRID_CELLS);
        for i in 0..GRID_CELLS as u32 {
            let cell = if i < start {
                GridCell {
                    day: days_in_prev - start + i + 1,
                    year: prev.year,
                    month0: prev.month0,
                    adjacent: true,
                    is_today: false,
                    is_selected: false,
                }
            } else if i < start + days {
                let day = i - start + 1;
                let date = month.date(day);
                GridCell {
                    day,
                    year: month.year,
                    month0: month.month0,
                    adjacent: false,
                    is_today: date == Some(today),
                    is_selected: date.is_some() && date == selected,
                }
            } else {
                GridCell {
                    day: i - start - days + 1,
                    year: next.year,
                    month0: next.month0,
                    adjacent: true,
                    is_today: false,
                    is_selected: false,
                }
            };
            cells.push(cell);
        }

        Self {
            month,
            first_day_of_week,
            cells,
        }
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    /// Cell index of a current-month day number
    pub fn index_of_day(&self, day: u32) -> Option<usize> {
        if day == 0 || day > self.month.days_in_month() {
            return None;
        }
        Some((self.month.starting_offset(self.first_day_of_week) + day - 1) as usize)
    }
}

/// Map a linear cell index back to its date. Inverse of the grid layout,
/// used by pointer selection and focus movement.
pub fn cell_index_to_date(
    month: MonthCursor,
    first_day_of_week: u8,
    index: usize,
) -> Option<CellDate> {
    if index >= GRID_CELLS {
        return None;
    }
    let i = index as u32;
    let start = month.starting_offset(first_day_of_week);
    let days = month.days_in_month();

    let cell = if i < start {
        let prev = month.prev();
        CellDate {
            year: prev.year,
            month0: prev.month0,
            day: prev.days_in_month() - start + i + 1,
            adjacent: true,
        }
    } else if i < start + days {
        CellDate {
            year: month.year,
            month0: month.month0,
            day: i - start + 1,
            adjacent: false,
        }
    } else {
        let next = month.next();
        CellDate {
            year: next.year,
            month0: next.month0,
            day: i - start - days + 1,
            adjacent: true,
        }
    };
    Some(cell)
}

/// Weekday header labels permuted so the row starts at `first_day_of_week`
pub fn weekday_labels(first_day_of_week: u8) -> [&'static str; 7] {
    let mut labels = [""; 7];
    for (i, label) in labels.iter_mut().enumerate() {
        *label = DAY_LABELS[(i + first_day_of_week as usize) % 7];
    }
    labels
}
