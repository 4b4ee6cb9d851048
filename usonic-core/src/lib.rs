//! Board-agnostic core logic for the uSonic cleaner controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (actuator outputs, temperature source, input driver)
//! - Input event source (encoder detents, click / long-press classification)
//! - Settings store layout and defaults
//! - Menu state machine and submenu editors
//! - Timed-run controller with hysteresis actuator switching
//! - Screen rendering onto a [`usonic_display::DrawSurface`]
//!
//! The [`controller::Controller`] ties these together behind a single
//! step function that the firmware calls on every input tick.

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod config;
pub mod controller;
pub mod editor;
pub mod error;
pub mod input;
pub mod run;
pub mod settings;
pub mod state;
pub mod traits;
pub mod ui;

pub use controller::{Controller, Mode};
pub use error::Error;
