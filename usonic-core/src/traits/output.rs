//! Binary actuator output trait

/// On/off output line (heater, cleaner, backlight)
pub trait BinaryOutput {
    /// Switch the output
    ///
    /// Setting the state it already has must be harmless.
    fn set_on(&mut self, on: bool);

    /// Check if the output is currently on
    fn is_on(&self) -> bool;
}

impl<T: BinaryOutput + ?Sized> BinaryOutput for &mut T {
    fn set_on(&mut self, on: bool) {
        (**self).set_on(on)
    }

    fn is_on(&self) -> bool {
        (**self).is_on()
    }
}
