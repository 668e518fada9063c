//! Calendar grid and navigation tests
//!
//! Grid layout across month boundaries, first-day-of-week rotation, and
//! focus movement as a host would drive it.

use almanac::calendar::{
    weekday_labels, CalendarPopup, MonthCursor, MonthGrid, PopupSize, Viewport, GRID_CELLS,
};
use almanac::config::DatePickerSettings;
use almanac::messages::{Direction, PopupMsg};
use chrono::NaiveDate;

const SIZE: PopupSize = PopupSize {
    width: 200.0,
    height: 220.0,
};
const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn settings_with_fdow(first_day_of_week: u8) -> DatePickerSettings {
    DatePickerSettings {
        first_day_of_week,
        use_styled_dates: false,
        ..Default::default()
    }
}

// ========================================================================
// Grid layout
// ========================================================================

#[test]
fn test_january_2024_monday_start_has_no_leading_cells() {
    // Jan 1, 2024 is a Monday, so a Monday-start week fills cell 0
    let grid = MonthGrid::compute(MonthCursor::new(2024, 0), 1, None, d(2024, 1, 15));
    assert_eq!(grid.cells()[0].day, 1);
    assert!(!grid.cells()[0].adjacent);
    assert_eq!(grid.index_of_day(1), Some(0));
}

#[test]
fn test_january_2024_sunday_start_has_one_leading_cell() {
    let grid = MonthGrid::compute(MonthCursor::new(2024, 0), 0, None, d(2024, 1, 15));
    // Cell 0 is Dec 31, 2023
    assert_eq!(grid.cells()[0].day, 31);
    assert!(grid.cells()[0].adjacent);
    assert_eq!(grid.cells()[1].day, 1);
    assert_eq!(grid.index_of_day(1), Some(1));
}

#[test]
fn test_grid_always_has_42_cells() {
    for (year, month0) in [(2024, 1), (2023, 1), (2024, 11), (1999, 0)] {
        let grid = MonthGrid::compute(
            MonthCursor::new(year, month0),
            1,
            None,
            d(2024, 1, 1),
        );
        assert_eq!(grid.cells().len(), GRID_CELLS);
    }
}

#[test]
fn test_weekday_labels_rotate_with_first_day() {
    assert_eq!(weekday_labels(0)[0], "Su");
    assert_eq!(weekday_labels(1)[0], "Mo");
    assert_eq!(weekday_labels(6), ["Sa", "Su", "Mo", "Tu", "We", "Th", "Fr"]);
}

// ========================================================================
// Popup navigation
// ========================================================================

#[test]
fn test_month_buttons_walk_the_year() {
    let mut popup = CalendarPopup::new(settings_with_fdow(1), d(2024, 6, 15), SIZE, |_| {});
    popup.open(VIEWPORT);

    for _ in 0..7 {
        popup.update(PopupMsg::NavigateMonth(1));
    }
    assert_eq!(popup.display_month(), MonthCursor::new(2025, 0));
    assert_eq!(popup.frame().unwrap().title, "January 2025");

    for _ in 0..13 {
        popup.update(PopupMsg::NavigateMonth(-1));
    }
    assert_eq!(popup.display_month(), MonthCursor::new(2023, 11));
}

#[test]
fn test_focus_survives_month_detour() {
    let mut popup = CalendarPopup::new(settings_with_fdow(1), d(2024, 1, 15), SIZE, |_| {});
    popup.open(VIEWPORT);

    // Paging to another month hides the focus ring but keeps the focus
    popup.update(PopupMsg::NavigateMonth(1));
    assert_eq!(popup.frame().unwrap().focused_index, None);

    popup.update(PopupMsg::NavigateMonth(-1));
    assert_eq!(popup.frame().unwrap().focused_index, Some(14));
}

#[test]
fn test_wrap_back_rolls_display_to_previous_month() {
    let mut popup = CalendarPopup::new(settings_with_fdow(1), d(2024, 1, 1), SIZE, |_| {});
    popup.open(VIEWPORT);

    popup.update(PopupMsg::MoveFocus(Direction::Up));
    assert_eq!(popup.display_month(), MonthCursor::new(2023, 11));
    assert_eq!(popup.frame().unwrap().title, "December 2023");
}

#[test]
fn test_arrows_cannot_leave_month_forward() {
    // Forward month changes go through the header buttons, not arrows
    let mut popup = CalendarPopup::new(settings_with_fdow(1), d(2024, 1, 31), SIZE, |_| {});
    popup.open(VIEWPORT);

    assert!(!popup.update(PopupMsg::MoveFocus(Direction::Right)));
    assert!(!popup.update(PopupMsg::MoveFocus(Direction::Down)));
    assert_eq!(popup.display_month(), MonthCursor::new(2024, 0));
}

#[test]
fn test_rejected_move_changes_nothing() {
    // Feb 2024 with Monday start: Feb 1 is in cell 3; moving left from it
    // lands on a leading cell and is rejected
    let mut popup = CalendarPopup::new(settings_with_fdow(1), d(2024, 2, 1), SIZE, |_| {});
    popup.open(VIEWPORT);

    let before = popup.frame().unwrap().focused_index;
    assert!(!popup.update(PopupMsg::MoveFocus(Direction::Left)));
    assert_eq!(popup.display_month(), MonthCursor::new(2024, 1));
    assert_eq!(popup.frame().unwrap().focused_index, before);
}

#[test]
fn test_saturday_start_grid_matches_popup_frame() {
    let mut popup = CalendarPopup::new(settings_with_fdow(6), d(2024, 1, 15), SIZE, |_| {});
    popup.open(VIEWPORT);
    let frame = popup.frame().unwrap();

    // Jan 1, 2024 is Monday; Saturday-start offset is 2
    assert_eq!(frame.weekday_labels[0], "Sa");
    assert!(frame.cells[0].adjacent);
    assert!(frame.cells[1].adjacent);
    assert_eq!(frame.cells[2].day, 1);
    assert_eq!(frame.focused_index, Some(2 + 14));
}
