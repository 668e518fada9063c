//! Double-tap trigger for opening the popup from the keyboard.
//!
//! Tapping the trigger key (`@` by default) twice within the window opens
//! the calendar at the caret. The first tap arms the trigger; any other
//! key, or letting the window lapse, disarms it.

use std::time::{Duration, Instant};

/// Second tap must land strictly inside this window
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TapState {
    Idle,
    AwaitingSecondTap { deadline: Instant },
}

/// What the host should do with the trigger key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Not part of a double tap; let the key insert normally
    Pass,
    /// First tap recorded; let the key insert normally
    Armed,
    /// Second tap inside the window; the host deletes the previously
    /// inserted trigger character and opens the popup
    Fired,
}

/// Detects a double tap of the trigger key
#[derive(Debug)]
pub struct DoubleTapTrigger {
    trigger_char: char,
    state: TapState,
}

impl Default for DoubleTapTrigger {
    fn default() -> Self {
        Self::new('@')
    }
}

impl DoubleTapTrigger {
    pub fn new(trigger_char: char) -> Self {
        Self {
            trigger_char,
            state: TapState::Idle,
        }
    }

    pub fn trigger_char(&self) -> char {
        self.trigger_char
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, TapState::AwaitingSecondTap { .. })
    }

    /// Feed a typed character. `now` is injected so the window is testable.
    pub fn on_char(&mut self, ch: char, now: Instant) -> TapOutcome {
        if ch != self.trigger_char {
            self.state = TapState::Idle;
            return TapOutcome::Pass;
        }
        match self.state {
            TapState::AwaitingSecondTap { deadline } if now < deadline => {
                self.state = TapState::Idle;
                TapOutcome::Fired
            }
            _ => {
                self.state = TapState::AwaitingSecondTap {
                    deadline: now + DOUBLE_TAP_WINDOW,
                };
                TapOutcome::Armed
            }
        }
    }

    /// Non-character input (arrows, clicks) disarms the trigger
    pub fn reset(&mut self) {
        self.state = TapState::Idle;
    }
}
