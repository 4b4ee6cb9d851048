//! Temperature sensor drivers
//!
//! The DS18B20 protocol comes from the `one-wire-bus` and `ds18b20` crates
//! ([`OneWireThermometer`]); [`BackgroundSensor`] turns its slow
//! conversions into a non-blocking [`TemperatureSource`].
//!
//! [`TemperatureSource`]: usonic_core::traits::TemperatureSource

pub mod background;
pub mod onewire;

pub use background::{BackgroundSensor, DEFAULT_MAX_POLLS};
pub use onewire::OneWireThermometer;

use usonic_core::traits::SensorError;

/// A sensor measured by explicit start/poll/read conversion cycles
pub trait Thermometer {
    /// Start a temperature conversion
    fn start_conversion(&mut self) -> Result<(), SensorError>;

    /// Check whether the running conversion has finished
    fn conversion_done(&mut self) -> Result<bool, SensorError>;

    /// Read the finished conversion in tenths of a degree Fahrenheit
    fn read_conversion(&mut self) -> Result<i16, SensorError>;
}
