//! Actuator output drivers

pub mod gpio;

pub use gpio::GpioOutput;
