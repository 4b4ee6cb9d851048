//! Controller configuration
//!
//! Tunable parameters of the control loop. The firmware bakes these in at
//! build time from `usonic.toml`; host tests use [`ControllerConfig::default`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default heater hysteresis offset below the set temperature (°F)
pub const DEFAULT_TEMP_OFFSET_F: u8 = 10;

/// Default hold time separating a click from a long press (ms)
pub const DEFAULT_LONG_PRESS_MS: u32 = 1000;

/// Default input polling interval (ms)
pub const DEFAULT_TICK_MS: u32 = 10;

/// Default quadrature transitions per encoder detent
pub const DEFAULT_CLICKS_PER_STEP: u8 = 4;

/// Default button debounce interval (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Control loop parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControllerConfig {
    /// The heater runs while the bath is more than this many °F below target
    pub temp_offset_f: u8,
    /// Releases held longer than this are long presses (ms)
    pub long_press_ms: u32,
    /// Input tick interval (ms)
    pub tick_ms: u32,
    /// Quadrature transitions per encoder detent
    pub clicks_per_step: u8,
    /// Button debounce interval (ms)
    pub debounce_ms: u32,
}

impl ControllerConfig {
    /// Configuration matching the stock hardware
    pub const fn new() -> Self {
        Self {
            temp_offset_f: DEFAULT_TEMP_OFFSET_F,
            long_press_ms: DEFAULT_LONG_PRESS_MS,
            tick_ms: DEFAULT_TICK_MS,
            clicks_per_step: DEFAULT_CLICKS_PER_STEP,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    /// Number of ticks a button level must hold before it is accepted
    pub const fn debounce_ticks(&self) -> u32 {
        if self.tick_ms == 0 {
            return 0;
        }
        self.debounce_ms.div_ceil(self.tick_ms)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new()
    }
}
