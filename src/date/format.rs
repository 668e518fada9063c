//! Pattern-based date formatting and parsing.
//!
//! Patterns use the tokens `YYYY`, `YY`, `MMM`, `MM`, `M`, `DD`, `D`,
//! matched longest-first and substituted once each, left to right. This is
//! deliberately a literal substitution pass, not a tokenizer: a pattern
//! containing an ambiguous run like `"MD"` resolves by simple left-to-right
//! replacement.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::config::DatePickerSettings;
use crate::date::MONTH_NAMES_SHORT;

/// Why a date string failed strict pattern parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseDateError {
    #[error("expected 3 date fields, found {0}")]
    FieldCount(usize),
    #[error("date field {0:?} is not a number")]
    NotANumber(String),
    #[error("no such calendar day: year {year}, month {month}, day {day}")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

/// Render `date` through `pattern`.
///
/// Each token kind is substituted at most once, in priority order
/// `YYYY, YY, MMM, MM, M, DD, D`.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let year = date.year();
    let month = date.month();
    let day = date.day();

    let mut out = pattern.to_string();
    out = out.replacen("YYYY", &year.to_string(), 1);
    out = out.replacen("YY", &format!("{:02}", year.rem_euclid(100)), 1);
    out = out.replacen("MMM", MONTH_NAMES_SHORT[(month - 1) as usize], 1);
    out = out.replacen("MM", &format!("{:02}", month), 1);
    out = out.replacen("M", &month.to_string(), 1);
    out = out.replacen("DD", &format!("{:02}", day), 1);
    out = out.replacen("D", &day.to_string(), 1);
    out
}

/// Canonical ISO form (`YYYY-MM-DD`) of a date
pub fn iso_date(date: NaiveDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Wrap a formatted date string in styled-token markup carrying the
/// canonical ISO value.
pub fn wrap_styled(date_string: &str, iso: &str) -> String {
    format!(
        "<span class=\"styled-date\" data-date=\"{}\">{}</span>",
        iso, date_string
    )
}

/// Render the text committed for `date` under the given settings: the
/// formatted string, wrapped as a styled token when styling is enabled.
pub fn render_committed(date: NaiveDate, settings: &DatePickerSettings) -> String {
    let date_string = format_date(date, &settings.format);
    if !settings.use_styled_dates {
        return date_string;
    }
    wrap_styled(&date_string, &iso_date(date))
}

/// Map a formatted date string back to ISO form.
///
/// Supported layouts: `YYYY-MM-DD` (already ISO), `MM/DD/YYYY`,
/// `DD/MM/YYYY`. Any other pattern returns the text unchanged - this is
/// best-effort by design, not a guarantee of correctness.
pub fn to_iso(text: &str, pattern: &str) -> String {
    if pattern == "YYYY-MM-DD" {
        return text.to_string();
    }

    if pattern == "MM/DD/YYYY" {
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() == 3 {
            return format!("{}-{}-{}", parts[2], pad2(parts[0]), pad2(parts[1]));
        }
    }

    if pattern == "DD/MM/YYYY" {
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() == 3 {
            return format!("{}-{}-{}", parts[2], pad2(parts[1]), pad2(parts[0]));
        }
    }

    text.to_string()
}

fn pad2(part: &str) -> String {
    format!("{:0>2}", part)
}

/// Parse a formatted date string using the pattern to determine field order.
///
/// Splits on `-`, `/`, or `.` and requires exactly three fields; the parts
/// are assigned to year/month/day by the positions of `YYYY`/`MM`/`DD`
/// within the pattern string.
pub fn parse_date_strict(text: &str, pattern: &str) -> Result<NaiveDate, ParseDateError> {
    let parts: Vec<&str> = text.split(['-', '/', '.']).collect();
    if parts.len() != 3 {
        return Err(ParseDateError::FieldCount(parts.len()));
    }

    // Order the year/month/day fields by where their tokens sit in the
    // pattern. An absent token sorts first.
    let mut fields: [(&str, i64); 3] = [
        ("YYYY", token_index(pattern, "YYYY")),
        ("MM", token_index(pattern, "MM")),
        ("DD", token_index(pattern, "DD")),
    ];
    fields.sort_by_key(|&(_, idx)| idx);

    let mut year: i32 = 0;
    let mut month: u32 = 0;
    let mut day: u32 = 0;
    for (i, (kind, _)) in fields.iter().enumerate() {
        let value: i64 = parts[i]
            .trim()
            .parse()
            .map_err(|_| ParseDateError::NotANumber(parts[i].to_string()))?;
        match *kind {
            "YYYY" => year = value as i32,
            "MM" => month = value.max(0) as u32,
            _ => day = value.max(0) as u32,
        }
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ParseDateError::OutOfRange { year, month, day })
}

/// Parse a formatted date string, degrading to safe defaults.
///
/// Anomalies never fail the caller: a malformed or unsupported string falls
/// back to a generic ISO parse, and finally to `today`.
pub fn parse_date(text: &str, pattern: &str, today: NaiveDate) -> NaiveDate {
    match parse_date_strict(text, pattern) {
        Ok(date) => date,
        Err(e) => {
            tracing::debug!("Pattern parse of {:?} failed ({}), trying generic", text, e);
            NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap_or(today)
        }
    }
}

fn token_index(pattern: &str, token: &str) -> i64 {
    pattern.find(token).map_or(-1, |i| i as i64)
}
