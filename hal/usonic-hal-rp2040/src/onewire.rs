//! Open-drain pin for the 1-Wire bus
//!
//! `one-wire-bus` drives the line through the embedded-hal 0.2 digital
//! traits. The output latch stays low: driving low switches the pin to an
//! output, releasing switches it back to an input so the pull-up (internal,
//! plus the external 4.7k) takes the line high.

use core::convert::Infallible;

use embassy_rp::gpio::{Flex, Pin, Pull};
use embassy_rp::Peri;
use embedded_hal_02::digital::v2::{InputPin, OutputPin};

/// 1-Wire data line on one GPIO
pub struct OneWirePin<'d> {
    pin: Flex<'d>,
}

impl<'d> OneWirePin<'d> {
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_pull(Pull::Up);
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }
}

impl OutputPin for OneWirePin<'_> {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_as_output();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_as_input();
        Ok(())
    }
}

impl InputPin for OneWirePin<'_> {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.pin.is_high())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.pin.is_low())
    }
}
