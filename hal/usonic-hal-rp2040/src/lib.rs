//! RP2040-specific HAL for the uSonic controller
//!
//! This crate provides RP2040 implementations of the shared `usonic-hal`
//! and `usonic-drivers` traits:
//!
//! - GPIO output/input wrappers (implement `usonic_hal::OutputPin` / `InputPin`)
//! - Flash page backend for EEPROM emulation (implements `PageBackend`)
//! - Open-drain 1-Wire data pin (embedded-hal 0.2 pins for `one-wire-bus`)

#![no_std]

pub mod flash;
pub mod gpio;
pub mod onewire;

pub use flash::FlashPage;
pub use gpio::{RpInput, RpOutput};
pub use onewire::OneWirePin;
