//! Urgency classification for rendered date tokens.
//!
//! Purely presentational and recomputed on every render pass; the
//! classification tag in the markup is derived, never authoritative.

use chrono::NaiveDate;

/// How close a token's date is to the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// The token's date is today (local midnight-to-midnight)
    Urgent,
    /// Any other date
    Neutral,
}

impl Urgency {
    /// Presentational class tag carried in token markup
    pub const fn css_class(self) -> &'static str {
        match self {
            Urgency::Urgent => "date-urgent",
            Urgency::Neutral => "date-neutral",
        }
    }
}

/// Classify a date against the current day. Idempotent, no side effects.
pub fn classify(date: NaiveDate, today: NaiveDate) -> Urgency {
    if date == today {
        Urgency::Urgent
    } else {
        Urgency::Neutral
    }
}

/// Classify an embedded ISO attribute value. Returns `None` when the
/// attribute does not hold a valid ISO date; such tokens keep whatever
/// tag they had.
pub fn classify_iso(iso: &str, today: NaiveDate) -> Option<Urgency> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()?;
    Some(classify(date, today))
}
