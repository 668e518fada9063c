//! Text buffer abstraction over the host editor's document.
//!
//! The date-picker core never talks to a concrete editor widget; it reads
//! and edits text through these traits:
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: line/offset addressing and
//!   range-replace over a buffer implementation
//! - [`StringBuffer`]: single-line buffer (tests, small inputs)
//! - [`RopeBuffer`]: multi-line document buffer (backed by `ropey::Rope`)
//! - [`Position`] / [`Selection`]: caret and highlight addressing
//!
//! All offsets are character offsets, matching how the host editor
//! addresses its document.

mod buffer;
mod cursor;
mod selection;

pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use cursor::Position;
pub use selection::Selection;
