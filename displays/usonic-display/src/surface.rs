//! Draw surface trait
//!
//! Defines the interface the controller renders through.

use core::fmt::{self, Write};

use heapless::String;

/// Panel width in pixels
pub const PANEL_WIDTH: u16 = 84;

/// Panel height in pixels
pub const PANEL_HEIGHT: u16 = 48;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized (no font selected)
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

/// Drawing colour for subsequent text and boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawColor {
    /// Pixels cleared (background)
    Off,
    /// Pixels set (foreground)
    #[default]
    On,
}

/// Fonts available to the renderer
///
/// The panel only ever uses one font; the enum exists so the surface can
/// reject drawing before a font was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 5x8 fixed-width ASCII
    Mono5x8,
}

impl Font {
    /// Horizontal advance per glyph in pixels
    pub const fn glyph_width(self) -> u16 {
        match self {
            Font::Mono5x8 => 5,
        }
    }

    /// Vertical pitch of one text row in pixels
    pub const fn line_height(self) -> u16 {
        match self {
            Font::Mono5x8 => 9,
        }
    }

    /// Offset from the top of a row to the text baseline
    pub const fn baseline(self) -> u16 {
        match self {
            Font::Mono5x8 => 7,
        }
    }

    /// Top pixel of text row `row`
    pub const fn row_top(self, row: u8) -> u16 {
        row as u16 * self.line_height()
    }

    /// Cursor y coordinate that places text on row `row`
    pub const fn row_baseline(self, row: u8) -> u16 {
        self.row_top(row) + self.baseline()
    }

    /// Cursor x coordinate of character column `col`
    pub const fn column_x(self, col: u8) -> u16 {
        col as u16 * self.glyph_width()
    }
}

/// Buffered monochrome draw surface
///
/// All drawing goes to an off-screen buffer; nothing is visible until
/// [`send_buffer`](Self::send_buffer).
pub trait DrawSurface {
    /// Clear the off-screen buffer
    fn clear_buffer(&mut self) -> Result<(), DisplayError>;

    /// Select the font for subsequent text
    fn set_font(&mut self, font: Font) -> Result<(), DisplayError>;

    /// Move the text cursor; `y` is the baseline
    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError>;

    /// Print text at the cursor and advance it
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Fill a box with the current draw colour
    fn draw_box(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError>;

    /// Set the colour used by `print` and `draw_box`
    fn set_draw_color(&mut self, color: DrawColor) -> Result<(), DisplayError>;

    /// Apply a contrast level to the panel immediately
    fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError>;

    /// Transfer the off-screen buffer to the panel
    fn send_buffer(&mut self) -> Result<(), DisplayError>;
}

/// Helper methods for formatted output
pub trait SurfaceExt: DrawSurface {
    /// Print a signed integer in decimal
    fn print_int(&mut self, value: i32) -> Result<(), DisplayError> {
        let mut buf: String<12> = String::new();
        write!(buf, "{}", value).map_err(|_| DisplayError::BufferOverflow)?;
        self.print(&buf)
    }

    /// Print formatted text (at most one panel line)
    fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), DisplayError> {
        let mut buf: String<32> = String::new();
        buf.write_fmt(args)
            .map_err(|_| DisplayError::BufferOverflow)?;
        self.print(&buf)
    }

    /// Print text at the start of a text row
    fn print_row(&mut self, font: Font, row: u8, text: &str) -> Result<(), DisplayError> {
        self.set_cursor(0, font.row_baseline(row))?;
        self.print(text)
    }
}

// Blanket implementation for all DrawSurface types
impl<T: DrawSurface + ?Sized> SurfaceExt for T {}

impl<T: DrawSurface + ?Sized> DrawSurface for &mut T {
    fn clear_buffer(&mut self) -> Result<(), DisplayError> {
        (**self).clear_buffer()
    }

    fn set_font(&mut self, font: Font) -> Result<(), DisplayError> {
        (**self).set_font(font)
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        (**self).set_cursor(x, y)
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        (**self).print(text)
    }

    fn draw_box(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        (**self).draw_box(x, y, width, height)
    }

    fn set_draw_color(&mut self, color: DrawColor) -> Result<(), DisplayError> {
        (**self).set_draw_color(color)
    }

    fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        (**self).set_contrast(contrast)
    }

    fn send_buffer(&mut self) -> Result<(), DisplayError> {
        (**self).send_buffer()
    }
}
