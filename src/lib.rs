//! Almanac - inline date-picker core for text editor hosts
//!
//! This crate provides the logic behind a date-picker widget embedded in a
//! text editor: calendar grid math, keyboard-focus navigation, popup
//! placement, date formatting, and atomic editing of inline date tokens.
//!
//! The host application (rendering surface, event loop, command palette) is
//! an external collaborator: it feeds [`messages::PopupMsg`] events into a
//! [`calendar::CalendarPopup`], draws the plain-data frame the popup
//! produces, and applies buffer edits through the [`editable`] traits.

pub mod calendar;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod date;
pub mod editable;
pub mod host;
pub mod messages;
pub mod token;
pub mod tracing;
pub mod trigger;

// Re-export commonly used types
pub use calendar::{CalendarPopup, MonthGrid};
pub use commands::Cmd;
pub use config::DatePickerSettings;
pub use messages::PopupMsg;
pub use token::AtomicDateTokens;
