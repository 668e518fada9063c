//! End-to-end date commit tests
//!
//! Open the popup, navigate, commit, and apply the result to a buffer the
//! way a host would.

use std::cell::RefCell;
use std::rc::Rc;

use almanac::calendar::{CalendarPopup, PopupSize, Viewport};
use almanac::config::DatePickerSettings;
use almanac::editable::{Position, StringBuffer, TextBuffer};
use almanac::messages::{Direction, PopupMsg};
use almanac::token::{insert_at_caret, scan_line};
use almanac::Cmd;
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

fn committed(settings: DatePickerSettings, today: NaiveDate, drive: impl FnOnce(&mut CalendarPopup)) -> String {
    let sink = Rc::new(RefCell::new(String::new()));
    let writer = Rc::clone(&sink);
    let mut popup = CalendarPopup::new(settings, today, SIZE, move |text| {
        *writer.borrow_mut() = text;
    });
    popup.open(VIEWPORT);
    drive(&mut popup);
    let result = sink.borrow().clone();
    result
}

// ========================================================================
// Commit output
// ========================================================================

#[test]
fn test_plain_commit_of_todays_date() {
    let settings = DatePickerSettings {
        use_styled_dates: false,
        ..Default::default()
    };
    let text = committed(settings, d(2024, 1, 1), |popup| {
        popup.update(PopupMsg::Activate);
    });
    assert_eq!(text, "2024-01-01");
}

#[test]
fn test_styled_commit_wraps_markup() {
    let text = committed(DatePickerSettings::default(), d(2024, 1, 1), |popup| {
        popup.update(PopupMsg::Activate);
    });
    assert_eq!(
        text,
        "<span class=\"styled-date\" data-date=\"2024-01-01\">2024-01-01</span>"
    );
}

#[test]
fn test_commit_honors_custom_format() {
    let settings = DatePickerSettings {
        format: "DD/MM/YYYY".to_string(),
        use_styled_dates: false,
        ..Default::default()
    };
    let text = committed(settings, d(2024, 3, 7), |popup| {
        popup.update(PopupMsg::Activate);
    });
    assert_eq!(text, "07/03/2024");
}

#[test]
fn test_arrow_navigation_before_commit() {
    let settings = DatePickerSettings {
        use_styled_dates: false,
        ..Default::default()
    };
    let text = committed(settings, d(2024, 1, 15), |popup| {
        popup.update(PopupMsg::MoveFocus(Direction::Down));
        popup.update(PopupMsg::MoveFocus(Direction::Right));
        popup.update(PopupMsg::Activate);
    });
    assert_eq!(text, "2024-01-23");
}

#[test]
fn test_commit_after_wrap_into_previous_month() {
    let settings = DatePickerSettings {
        use_styled_dates: false,
        ..Default::default()
    };
    // Jan 1, 2024 sits in the first cell with Monday start; left wraps to
    // the last day of December
    let text = committed(settings, d(2024, 1, 1), |popup| {
        popup.update(PopupMsg::MoveFocus(Direction::Left));
        popup.update(PopupMsg::Activate);
    });
    assert_eq!(text, "2023-12-31");
}

// ========================================================================
// Applying the commit to a buffer
// ========================================================================

#[test]
fn test_styled_commit_inserted_at_caret_is_scannable() {
    let text = committed(DatePickerSettings::default(), d(2024, 1, 1), |popup| {
        popup.update(PopupMsg::Activate);
    });

    let mut buffer = StringBuffer::from_text("todo: ");
    let outcome = insert_at_caret(&mut buffer, &text, Position::new(0, 6));

    let line = buffer.line(0).unwrap().to_string();
    let spans = scan_line(&line);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].start, 6);
    assert_eq!(spans[0].iso.as_deref(), Some("2024-01-01"));

    // Styled insert schedules the deferred caret move
    let Some(Cmd::RepositionCaret { position, delay_ms }) = outcome.deferred else {
        panic!("expected a deferred caret move");
    };
    assert_eq!(position, outcome.caret);
    assert_eq!(delay_ms, 10);
}

#[test]
fn test_plain_commit_inserted_at_caret() {
    let settings = DatePickerSettings {
        use_styled_dates: false,
        ..Default::default()
    };
    let text = committed(settings, d(2024, 1, 1), |popup| {
        popup.update(PopupMsg::Activate);
    });

    let mut buffer = StringBuffer::from_text("due ");
    let outcome = insert_at_caret(&mut buffer, &text, Position::new(0, 4));
    assert_eq!(buffer.as_str(), "due 2024-01-01 ");
    assert_eq!(outcome.caret, Position::new(0, 15));
    assert!(outcome.deferred.is_none());
}

#[test]
fn test_escape_then_reopen_commits_nothing_until_enter() {
    let sink = Rc::new(RefCell::new(Vec::new()));
    let writer = Rc::clone(&sink);
    let mut popup = CalendarPopup::new(
        DatePickerSettings {
            use_styled_dates: false,
            ..Default::default()
        },
        d(2024, 1, 1),
        SIZE,
        move |text| writer.borrow_mut().push(text),
    );

    popup.open(VIEWPORT);
    popup.update(PopupMsg::Close);
    assert!(sink.borrow().is_empty());

    popup.open(VIEWPORT);
    popup.update(PopupMsg::Activate);
    assert_eq!(sink.borrow().as_slice(), ["2024-01-01"]);
}
