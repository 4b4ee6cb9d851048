//! Input event source
//!
//! Turns the raw encoder position and button releases into discrete
//! events, at most one rotation event and one button event per tick.

use crate::traits::InputDriver;

/// User input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Knob turned one detent towards lower positions
    Up,
    /// Knob turned one detent towards higher positions
    Down,
    /// Button released within the long-press threshold
    Click,
    /// Button released after the long-press threshold (held ms)
    LongPress(u32),
}

impl InputEvent {
    /// True for both click kinds
    pub fn is_press(&self) -> bool {
        matches!(self, InputEvent::Click | InputEvent::LongPress(_))
    }
}

/// Events gathered during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickEvents {
    /// Rotation event, if the knob moved
    pub rotation: Option<InputEvent>,
    /// Button event, if the button was released
    pub button: Option<InputEvent>,
}

impl TickEvents {
    /// A tick without input
    pub const NONE: Self = Self {
        rotation: None,
        button: None,
    };

    /// Tick carrying a single event
    pub fn single(event: InputEvent) -> Self {
        if event.is_press() {
            Self {
                rotation: None,
                button: Some(event),
            }
        } else {
            Self {
                rotation: Some(event),
                button: None,
            }
        }
    }

    /// True if nothing happened
    pub fn is_empty(&self) -> bool {
        self.rotation.is_none() && self.button.is_none()
    }

    /// Events in processing order, rotation first
    pub fn iter(&self) -> impl Iterator<Item = InputEvent> {
        self.rotation.into_iter().chain(self.button)
    }
}

/// Input event source
///
/// Tracks the last encoder position it reported. When the knob moved more
/// than one detent between polls, one event is emitted per poll until the
/// backlog is drained, so no step is lost.
#[derive(Debug, Clone)]
pub struct InputSource {
    last_position: i16,
    long_press_ms: u32,
}

impl InputSource {
    /// Create an event source starting at the driver's current position
    pub fn new<D: InputDriver>(driver: &mut D, long_press_ms: u32) -> Self {
        Self {
            last_position: driver.position(),
            long_press_ms,
        }
    }

    /// Sample the driver once and return this tick's events
    pub fn poll<D: InputDriver>(&mut self, driver: &mut D) -> TickEvents {
        let position = driver.position();
        let rotation = match position.wrapping_sub(self.last_position) {
            0 => None,
            delta if delta > 0 => {
                self.last_position = self.last_position.wrapping_add(1);
                Some(InputEvent::Down)
            }
            _ => {
                self.last_position = self.last_position.wrapping_sub(1);
                Some(InputEvent::Up)
            }
        };

        let button = driver.take_release().map(|held| self.classify(held));

        TickEvents { rotation, button }
    }

    /// Classify a release by how long the button was held
    pub fn classify(&self, held_ms: u32) -> InputEvent {
        if held_ms > self.long_press_ms {
            InputEvent::LongPress(held_ms)
        } else {
            InputEvent::Click
        }
    }
}
