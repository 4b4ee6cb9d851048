//! GPIO actuator output
//!
//! Drives a relay, SSR or backlight transistor from a GPIO pin.

use usonic_core::traits::BinaryOutput;
use usonic_hal::OutputPin;

/// GPIO-driven on/off output
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioOutput<P> {
    pin: P,
    /// If true, output ON = pin LOW
    inverted: bool,
    /// Current logical state (true = on)
    on: bool,
}

impl<P: OutputPin> GpioOutput<P> {
    /// Create a new output, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the output is ON when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut output = Self {
            pin,
            inverted,
            on: false,
        };
        output.set_on(false);
        output
    }

    /// Create an active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create an active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> BinaryOutput for GpioOutput<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(on != self.inverted);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        writes: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                writes: 0,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_output() {
        let mut output = GpioOutput::new_active_high(MockPin::new());

        assert!(!output.is_on());
        assert!(output.pin.is_set_low());

        output.set_on(true);
        assert!(output.is_on());
        assert!(output.pin.is_set_high());

        output.set_on(false);
        assert!(!output.is_on());
        assert!(output.pin.is_set_low());
    }

    #[test]
    fn test_active_low_output() {
        let mut output = GpioOutput::new_active_low(MockPin::new());

        // Off drives the pin high
        assert!(!output.is_on());
        assert!(output.pin.is_set_high());

        output.set_on(true);
        assert!(output.is_on());
        assert!(output.pin.is_set_low());
    }

    #[test]
    fn test_repeated_set_is_harmless() {
        let mut output = GpioOutput::new_active_high(MockPin::new());
        output.set_on(true);
        output.set_on(true);
        assert!(output.is_on());
        assert!(output.pin.is_set_high());
        assert_eq!(output.into_inner().writes, 3);
    }
}
