//! Timed cleaning run
//!
//! Counts down the configured duration while switching between heating
//! and cleaning around the set temperature.

pub mod hysteresis;
pub mod timed;

pub use hysteresis::select_activity;
pub use timed::{RunPhase, TimedRun};
