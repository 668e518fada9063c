//! Command types for host integration
//!
//! Commands represent side effects the host should perform after an update.
//! The palette registry lists the commands a host can expose for this
//! widget; the `Cmd` type carries the one deferred effect the commit path
//! needs.

use crate::editable::Position;

// ============================================================================
// Command Palette Registry
// ============================================================================

/// Identifies a command that can be executed via the host command palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    /// Open the calendar popup and insert the chosen date at the cursor
    InsertDate,
}

/// A command definition for the host command palette
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    pub label: &'static str,
    pub keybinding: Option<&'static str>,
}

/// Static registry of all commands this widget contributes
pub static COMMANDS: &[CommandDef] = &[CommandDef {
    id: CommandId::InsertDate,
    label: "Insert date at cursor position",
    keybinding: None,
}];

// ============================================================================
// Side Effects
// ============================================================================

/// Side effects to be performed by the host after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Move the caret after a short delay.
    ///
    /// Needed after inserting styled markup: the host's reflow of rendered
    /// markup is not synchronous with the edit, so an immediate caret move
    /// would land inside stale layout. Fire-and-forget: no cancellation, no
    /// retry. If the host state changes before it fires, the caret lands at
    /// a stale position.
    RepositionCaret { position: Position, delay_ms: u64 },
}
