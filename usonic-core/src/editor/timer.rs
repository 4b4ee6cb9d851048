//! Timer duration picker

use super::EditOutcome;
use crate::input::InputEvent;

/// Selectable run durations (minutes)
pub const TIMER_PRESETS: [u8; 7] = [3, 8, 10, 15, 20, 30, 60];

/// Steps through the duration presets
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerPicker {
    index: usize,
}

impl TimerPicker {
    /// Start on the saved duration, or the first preset if it is not one
    pub fn new(saved_minutes: u8) -> Self {
        let index = TIMER_PRESETS
            .iter()
            .position(|&m| m == saved_minutes)
            .unwrap_or(0);
        Self { index }
    }

    /// Selected preset index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Selected duration (minutes)
    pub fn minutes(&self) -> u8 {
        TIMER_PRESETS[self.index]
    }

    /// Handle an input event; any press confirms
    pub fn handle(&mut self, event: InputEvent) -> EditOutcome {
        let n = TIMER_PRESETS.len();
        match event {
            InputEvent::Down => self.index = (self.index + 1) % n,
            InputEvent::Up => self.index = (self.index + n - 1) % n,
            InputEvent::Click | InputEvent::LongPress(_) => return EditOutcome::Commit,
        }
        EditOutcome::Continue
    }
}
