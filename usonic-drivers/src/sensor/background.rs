//! Non-blocking reads over a slow thermometer
//!
//! A 12-bit DS18B20 conversion takes up to 750 ms, far longer than one
//! controller step. [`BackgroundSensor`] keeps a conversion in flight, checks
//! it once per read and serves the latest finished value meanwhile.

use usonic_core::traits::{SensorError, TemperatureSource};

use super::Thermometer;

/// Reads allowed for one conversion before it counts as stuck
pub const DEFAULT_MAX_POLLS: u16 = 100;

/// Serves the most recent finished conversion without waiting
pub struct BackgroundSensor<T> {
    thermometer: T,
    /// Reads spent on the conversion in flight
    converting: Option<u16>,
    last_x10: Option<i16>,
    max_polls: u16,
}

impl<T: Thermometer> BackgroundSensor<T> {
    pub fn new(thermometer: T, max_polls: u16) -> Self {
        Self {
            thermometer,
            converting: None,
            last_x10: None,
            max_polls,
        }
    }

    /// Run one full conversion, calling `wait` between completion checks
    ///
    /// Used at boot so the first screen has a temperature. Gives up with
    /// [`SensorError::ConversionTimeout`] after `max_polls` waits.
    pub fn measure_blocking(&mut self, mut wait: impl FnMut()) -> Result<i16, SensorError> {
        self.converting = None;
        self.thermometer.start_conversion()?;
        for _ in 0..self.max_polls {
            if self.thermometer.conversion_done()? {
                let value = self.thermometer.read_conversion()?;
                self.last_x10 = Some(value);
                return Ok(value);
            }
            wait();
        }
        Err(SensorError::ConversionTimeout)
    }

    /// Latest finished reading, if any
    pub fn last_fahrenheit_x10(&self) -> Option<i16> {
        self.last_x10
    }

    pub fn thermometer(&mut self) -> &mut T {
        &mut self.thermometer
    }

    pub fn into_inner(self) -> T {
        self.thermometer
    }

    fn fault(&mut self, e: SensorError) -> SensorError {
        #[cfg(feature = "defmt")]
        defmt::debug!("sensor fault: {}", e);
        self.converting = None;
        self.last_x10 = None;
        e
    }
}

impl<T: Thermometer> TemperatureSource for BackgroundSensor<T> {
    fn read_fahrenheit_x10(&mut self) -> Result<i16, SensorError> {
        match self.converting {
            None => {
                if let Err(e) = self.thermometer.start_conversion() {
                    return Err(self.fault(e));
                }
                self.converting = Some(0);
            }
            Some(polls) => match self.thermometer.conversion_done() {
                Err(e) => return Err(self.fault(e)),
                Ok(true) => {
                    let value = match self.thermometer.read_conversion() {
                        Ok(value) => value,
                        Err(e) => return Err(self.fault(e)),
                    };
                    self.last_x10 = Some(value);
                    self.converting = match self.thermometer.start_conversion() {
                        Ok(()) => Some(0),
                        Err(_) => None,
                    };
                }
                Ok(false) if polls >= self.max_polls => {
                    return Err(self.fault(SensorError::ConversionTimeout));
                }
                Ok(false) => self.converting = Some(polls + 1),
            },
        }
        self.last_x10.ok_or(SensorError::NotReady)
    }

    fn restart(&mut self) {
        self.converting = None;
        self.last_x10 = None;
    }
}
