//! Encoder knob with push button
//!
//! Combines the quadrature decoder and the debounced button into the
//! [`InputDriver`] the input event source polls.

use usonic_core::config::ControllerConfig;
use usonic_core::traits::InputDriver;

use super::{DebouncedButton, QuadratureEncoder};

/// Rotary knob with integrated push switch
#[derive(Debug, Clone)]
pub struct Knob {
    encoder: QuadratureEncoder,
    button: DebouncedButton,
}

impl Knob {
    /// Create from the current A/B levels
    pub fn new(config: &ControllerConfig, a: bool, b: bool) -> Self {
        Self {
            encoder: QuadratureEncoder::new(a, b, config.clicks_per_step),
            button: DebouncedButton::new(config.debounce_ms),
        }
    }

    /// Feed one sample of all three lines
    pub fn sample(&mut self, a: bool, b: bool, pressed: bool, now_ms: u32) {
        self.encoder.update(a, b);
        self.button.update(pressed, now_ms);
    }

    pub fn encoder(&self) -> &QuadratureEncoder {
        &self.encoder
    }

    pub fn button(&self) -> &DebouncedButton {
        &self.button
    }
}

impl InputDriver for Knob {
    fn position(&mut self) -> i16 {
        self.encoder.position()
    }

    fn take_release(&mut self) -> Option<u32> {
        self.button.take_release()
    }
}
