//! Rotary encoder and push-button drivers

pub mod button;
pub mod encoder;
pub mod knob;

pub use button::DebouncedButton;
pub use encoder::QuadratureEncoder;
pub use knob::Knob;
