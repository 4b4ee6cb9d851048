//! Raw input driver trait

/// Rotary encoder with push button
pub trait InputDriver {
    /// Absolute encoder position in detents
    ///
    /// The count wraps at the `i16` bounds.
    fn position(&mut self) -> i16;

    /// Take the hold duration of the last button release, if any
    ///
    /// Each release is reported once.
    fn take_release(&mut self) -> Option<u32>;
}
