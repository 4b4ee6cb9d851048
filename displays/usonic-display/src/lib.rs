//! Display abstraction and shared rendering components for uSonic
//!
//! This crate provides:
//! - `DrawSurface` trait modelled on a buffered monochrome graphics library
//!   (clear, cursor, print, box, draw colour, contrast, send)
//! - `TextCanvas`, a character-cell surface used by host tests and the
//!   simulator to observe what the controller drew
//! - `Pcd8544`, the 84x48 Nokia 5110 panel driver (feature `pcd8544`)
//!
//! # Architecture
//!
//! The controller in `usonic-core` renders every screen through
//! `DrawSurface` and never touches pixels directly. The panel geometry
//! (84x48 with a 5x8 font on a 9 px line pitch) is shared here so both the
//! renderer and the surfaces agree on where a text row lives.

#![no_std]
#![deny(unsafe_code)]

pub mod canvas;
pub mod surface;

#[cfg(feature = "pcd8544")]
pub mod pcd8544;

// Re-export key types
pub use canvas::{TextCanvas, CANVAS_COLS, CANVAS_ROWS};
pub use surface::{
    DisplayError, DrawColor, DrawSurface, Font, SurfaceExt, PANEL_HEIGHT, PANEL_WIDTH,
};

#[cfg(feature = "pcd8544")]
pub use pcd8544::Pcd8544;
