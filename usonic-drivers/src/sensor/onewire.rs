//! DS18B20 on a 1-Wire bus
//!
//! Bus timing comes from `one-wire-bus` and the device commands from
//! `ds18b20`. The first DS18B20 found by a ROM search is used; its address
//! is forgotten after any bus error so a replaced sensor is found again.

use core::fmt::Debug;

use ds18b20::Ds18b20;
use embedded_hal_02::blocking::delay::DelayUs;
use embedded_hal_02::digital::v2::{InputPin, OutputPin};
use one_wire_bus::{Address, OneWire, OneWireError, OneWireResult};
use usonic_core::traits::SensorError;

use super::Thermometer;

/// Convert degrees Celsius to 0.1 °F, rounding to nearest
pub fn celsius_to_fahrenheit_x10(celsius: f32) -> i16 {
    let tenths = celsius * 18.0 + 320.0;
    let rounded = if tenths >= 0.0 {
        tenths + 0.5
    } else {
        tenths - 0.5
    };
    rounded as i16
}

/// Map a bus error onto the sensor error the controller reports
pub fn sensor_error<E>(e: OneWireError<E>) -> SensorError {
    match e {
        OneWireError::CrcMismatch => SensorError::CrcMismatch,
        OneWireError::FamilyCodeMismatch => SensorError::NoDevice,
        OneWireError::Timeout => SensorError::ConversionTimeout,
        _ => SensorError::Disconnected,
    }
}

/// DS18B20 thermometer on an open-drain pin
pub struct OneWireThermometer<P, D> {
    bus: OneWire<P>,
    delay: D,
    address: Option<Address>,
}

impl<P, D, E> OneWireThermometer<P, D>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayUs<u16>,
    E: Debug,
{
    /// Take the bus pin; no search happens until the first conversion
    pub fn new(pin: P, delay: D) -> Result<Self, SensorError> {
        let bus = OneWire::new(pin).map_err(sensor_error)?;
        Ok(Self {
            bus,
            delay,
            address: None,
        })
    }

    /// Address of the sensor in use, if one has been found
    pub fn address(&self) -> Option<Address> {
        self.address
    }

    /// Reset the bus and return the sensor, searching for it if needed
    fn device(&mut self) -> Result<Ds18b20, SensorError> {
        let present = self.bus.reset(&mut self.delay);
        if !self.check(present)? {
            self.address = None;
            return Err(SensorError::NoDevice);
        }

        let address = match self.address {
            Some(address) => address,
            None => {
                let address = self.search()?;
                self.address = Some(address);
                address
            }
        };
        Ds18b20::new::<E>(address).map_err(sensor_error)
    }

    fn search(&mut self) -> Result<Address, SensorError> {
        for found in self.bus.devices(false, &mut self.delay) {
            let address = found.map_err(sensor_error)?;
            if address.family_code() == ds18b20::FAMILY_CODE {
                #[cfg(feature = "defmt")]
                defmt::info!("DS18B20 found: {=u64:x}", address.0);
                return Ok(address);
            }
        }
        Err(SensorError::NoDevice)
    }

    fn check<T>(&mut self, result: OneWireResult<T, E>) -> Result<T, SensorError> {
        result.map_err(|e| {
            self.address = None;
            sensor_error(e)
        })
    }
}

impl<P, D, E> Thermometer for OneWireThermometer<P, D>
where
    P: InputPin<Error = E> + OutputPin<Error = E>,
    D: DelayUs<u16>,
    E: Debug,
{
    fn start_conversion(&mut self) -> Result<(), SensorError> {
        let device = self.device()?;
        let started = device.start_temp_measurement(&mut self.bus, &mut self.delay);
        self.check(started)
    }

    fn conversion_done(&mut self) -> Result<bool, SensorError> {
        // The DS18B20 answers read slots with 0 while converting
        let done = self.bus.read_bit(&mut self.delay);
        self.check(done)
    }

    fn read_conversion(&mut self) -> Result<i16, SensorError> {
        let device = self.device()?;
        let data = device.read_data(&mut self.bus, &mut self.delay);
        let data = self.check(data)?;
        Ok(celsius_to_fahrenheit_x10(data.temperature))
    }
}
