//! Screen rendering
//!
//! Every screen redraws the whole frame: clear, draw, flush.

pub mod screens;

pub use screens::{
    draw_contrast, draw_menu, draw_network, draw_run, draw_temperature, draw_timer, FONT,
};
