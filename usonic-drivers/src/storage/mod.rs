//! Persistent storage drivers

pub mod eeprom;

pub use eeprom::{EmulatedEeprom, PageBackend, RamPage, PAGE_LEN};
