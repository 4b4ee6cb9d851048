//! uSonic Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific HALs. The same controller logic then runs on the
//! RP2040 board and on the host test harness.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (usonic-firmware, tests)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  usonic-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  usonic-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`eeprom::EepromStorage`] - Byte-addressed persistent storage

#![no_std]
#![deny(unsafe_code)]

pub mod eeprom;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use eeprom::{EepromStorage, StorageError};
pub use gpio::{InputPin, OutputPin};
