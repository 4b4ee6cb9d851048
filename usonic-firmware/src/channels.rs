//! Inter-task communication channels

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use usonic_core::input::TickEvents;

/// Channel capacity for input events
const INPUT_CHANNEL_SIZE: usize = 8;

/// Knob events, one entry per input tick that produced any
pub static INPUT_CHANNEL: Channel<CriticalSectionRawMutex, TickEvents, INPUT_CHANNEL_SIZE> =
    Channel::new();
