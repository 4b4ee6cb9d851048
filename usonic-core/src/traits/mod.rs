//! Hardware abstraction traits
//!
//! These traits define the interface between the controller logic
//! and hardware-specific implementations.

pub mod input;
pub mod output;
pub mod sensor;

pub use input::InputDriver;
pub use output::BinaryOutput;
pub use sensor::{SensorError, TemperatureSource};
