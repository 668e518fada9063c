//! Date formatting, parsing, and urgency classification.
//!
//! All calendar math is plain Gregorian via `chrono::NaiveDate`; "today" is
//! always an explicit parameter so the logic stays deterministic under test.

mod format;
mod urgency;

pub use format::{
    format_date, iso_date, parse_date, parse_date_strict, render_committed, to_iso, wrap_styled,
    ParseDateError,
};
pub use urgency::{classify, classify_iso, Urgency};

/// Full month names for the popup header ("January 2024")
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Abbreviated month names for the `MMM` pattern token
pub const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
