//! Three-digit temperature editor
//!
//! Each digit wraps on its own, without carrying into its neighbour.
//! A click moves to the next digit; a long press saves.

use super::EditOutcome;
use crate::input::InputEvent;

/// Number of editable digits
pub const DIGITS: usize = 3;

/// Digit-by-digit temperature entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureEditor {
    /// Hundreds, tens, ones
    digits: [u8; DIGITS],
    cursor: usize,
}

impl TemperatureEditor {
    /// Split the saved value into digits, cursor on the hundreds
    pub fn new(saved_f: u8) -> Self {
        Self {
            digits: [saved_f / 100, saved_f / 10 % 10, saved_f % 10],
            cursor: 0,
        }
    }

    /// Current digits, most significant first
    pub fn digits(&self) -> [u8; DIGITS] {
        self.digits
    }

    /// Index of the selected digit
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Recomposed value, saturating at the largest storable setting
    pub fn value(&self) -> u8 {
        let [h, t, o] = self.digits.map(u16::from);
        (h * 100 + t * 10 + o).min(u8::MAX as u16) as u8
    }

    /// Handle an input event
    pub fn handle(&mut self, event: InputEvent) -> EditOutcome {
        let c = self.cursor;
        match event {
            InputEvent::Up => self.digits[c] = (self.digits[c] + 1) % 10,
            InputEvent::Down => self.digits[c] = (self.digits[c] + 9) % 10,
            InputEvent::Click => self.cursor = (self.cursor + 1) % DIGITS,
            InputEvent::LongPress(_) => return EditOutcome::Commit,
        }
        EditOutcome::Continue
    }
}
