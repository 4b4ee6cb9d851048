//! Persisted user settings
//!
//! Three single-byte slots in EEPROM-style storage. A stored zero means the
//! slot was never written, and the default is used instead.

use usonic_hal::eeprom::{EepromStorage, StorageError};

/// Storage offset of the set temperature
pub const TEMPERATURE_OFFSET: u16 = 0x00;

/// Storage offset of the timer duration
pub const TIMER_OFFSET: u16 = 0x08;

/// Storage offset of the display contrast
pub const CONTRAST_OFFSET: u16 = 0x10;

/// Set temperature used when none was saved (°F)
pub const DEFAULT_SET_TEMPERATURE_F: u8 = 72;

/// Timer duration used when none was saved (minutes)
pub const DEFAULT_TIMER_MINUTES: u8 = 10;

/// Display contrast used when none was saved
pub const DEFAULT_CONTRAST: u8 = 64;

/// User settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Bath target temperature (°F)
    pub set_temperature_f: u8,
    /// Run duration (minutes)
    pub timer_minutes: u8,
    /// Display contrast
    pub contrast: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            set_temperature_f: DEFAULT_SET_TEMPERATURE_F,
            timer_minutes: DEFAULT_TIMER_MINUTES,
            contrast: DEFAULT_CONTRAST,
        }
    }
}

impl Settings {
    /// Load settings, substituting defaults for unset slots
    pub fn load<S: EepromStorage>(store: &S) -> Result<Self, StorageError> {
        Ok(Self {
            set_temperature_f: or_default(
                store.get(TEMPERATURE_OFFSET)?,
                DEFAULT_SET_TEMPERATURE_F,
            ),
            timer_minutes: or_default(store.get(TIMER_OFFSET)?, DEFAULT_TIMER_MINUTES),
            contrast: or_default(store.get(CONTRAST_OFFSET)?, DEFAULT_CONTRAST),
        })
    }

    /// Load settings, falling back to defaults if the store is unreadable
    pub fn load_or_default<S: EepromStorage>(store: &S) -> Self {
        match Self::load(store) {
            Ok(settings) => settings,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Settings unreadable ({}), using defaults", _e);
                Self::default()
            }
        }
    }

    /// Write all three slots and commit them
    pub fn save<S: EepromStorage>(&self, store: &mut S) -> Result<(), StorageError> {
        store.put(TEMPERATURE_OFFSET, self.set_temperature_f)?;
        store.put(TIMER_OFFSET, self.timer_minutes)?;
        store.put(CONTRAST_OFFSET, self.contrast)?;
        store.commit()
    }
}

fn or_default(stored: u8, default: u8) -> u8 {
    if stored == 0 {
        default
    } else {
        stored
    }
}
