//! Submenu editors
//!
//! Each editor starts from the saved value, consumes input events, and
//! reports when the user confirmed. Confirmed edits are written back into
//! [`Settings`] by the controller, which then persists them.

pub mod contrast;
pub mod network;
pub mod temperature;
pub mod timer;

pub use contrast::ContrastAdjuster;
pub use network::NetworkPlaceholder;
pub use temperature::TemperatureEditor;
pub use timer::{TimerPicker, TIMER_PRESETS};

use crate::input::InputEvent;
use crate::settings::Settings;

/// Result of feeding an event to an editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditOutcome {
    /// Keep editing
    Continue,
    /// Save the buffer and return to the menu
    Commit,
}

/// The active submenu and its edit buffer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Editor {
    Timer(TimerPicker),
    Temperature(TemperatureEditor),
    Contrast(ContrastAdjuster),
    Network(NetworkPlaceholder),
}

impl Editor {
    /// Feed one input event
    pub fn handle(&mut self, event: InputEvent) -> EditOutcome {
        match self {
            Editor::Timer(picker) => picker.handle(event),
            Editor::Temperature(editor) => editor.handle(event),
            Editor::Contrast(adjuster) => adjuster.handle(event),
            Editor::Network(placeholder) => placeholder.handle(event),
        }
    }

    /// Write the edit buffer into the settings
    pub fn apply(&self, settings: &mut Settings) {
        match self {
            Editor::Timer(picker) => settings.timer_minutes = picker.minutes(),
            Editor::Temperature(editor) => settings.set_temperature_f = editor.value(),
            Editor::Contrast(adjuster) => settings.contrast = adjuster.value(),
            Editor::Network(_) => {}
        }
    }
}
