//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod controller;
pub mod input;

pub use controller::controller_task;
pub use input::input_task;
