//! Temperature source trait

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No device answered the bus reset
    NoDevice,
    /// Scratchpad failed its CRC check
    CrcMismatch,
    /// Device reported the disconnected sentinel
    Disconnected,
    /// Conversion did not finish in time
    ConversionTimeout,
    /// No conversion has completed since the source was restarted
    NotReady,
}

/// Trait for bath temperature sources
pub trait TemperatureSource {
    /// Read the current temperature in tenths of a degree Fahrenheit
    ///
    /// For example, 100.4°F is returned as 1004.
    fn read_fahrenheit_x10(&mut self) -> Result<i16, SensorError>;

    /// Read the current temperature in whole degrees Fahrenheit
    fn read_fahrenheit(&mut self) -> Result<i16, SensorError> {
        self.read_fahrenheit_x10().map(|t| t / 10)
    }

    /// Drop any earlier reading
    ///
    /// Called when a run starts. Until a new measurement completes, reads
    /// return [`SensorError::NotReady`]. Sources that always measure on
    /// demand keep the default no-op.
    fn restart(&mut self) {}
}
