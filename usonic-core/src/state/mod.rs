//! Menu state machine

pub mod menu;

pub use menu::MenuItem;
