//! Character-cell draw surface
//!
//! Records what the controller drew as text rows plus highlighted column
//! ranges, instead of pixels. Used by host tests and the simulator.

use crate::surface::{DisplayError, DrawColor, DrawSurface, Font, PANEL_HEIGHT, PANEL_WIDTH};

const FONT: Font = Font::Mono5x8;

/// Number of text rows on the panel
pub const CANVAS_ROWS: usize = (PANEL_HEIGHT / FONT.line_height()) as usize;

/// Number of character columns on the panel
pub const CANVAS_COLS: usize = (PANEL_WIDTH / FONT.glyph_width()) as usize;

/// Text-mode surface with highlight tracking
#[derive(Clone)]
pub struct TextCanvas {
    /// Character cells, space padded
    cells: [[u8; CANVAS_COLS]; CANVAS_ROWS],
    /// Used length of each row
    lens: [u8; CANVAS_ROWS],
    /// Filled region per row as (start_col, end_col), end exclusive
    highlights: [Option<(u8, u8)>; CANVAS_ROWS],
    cursor: (u16, u16),
    color: DrawColor,
    font: Option<Font>,
    contrast: u8,
    frames_sent: u32,
}

impl Default for TextCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCanvas {
    /// Create a blank canvas with no font selected
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; CANVAS_COLS]; CANVAS_ROWS],
            lens: [0; CANVAS_ROWS],
            highlights: [None; CANVAS_ROWS],
            cursor: (0, 0),
            color: DrawColor::On,
            font: None,
            contrast: 0,
            frames_sent: 0,
        }
    }

    /// Text of a row, without trailing padding
    pub fn line(&self, row: usize) -> &str {
        match self.cells.get(row) {
            Some(cells) => {
                let len = self.lens[row] as usize;
                core::str::from_utf8(&cells[..len])
                    .unwrap_or("")
                    .trim_end()
            }
            None => "",
        }
    }

    /// Highlighted column range of a row
    pub fn highlight(&self, row: usize) -> Option<(u8, u8)> {
        self.highlights.get(row).copied().flatten()
    }

    /// First row carrying a highlight
    pub fn highlighted_row(&self) -> Option<usize> {
        self.highlights.iter().position(Option::is_some)
    }

    /// True if any row contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        (0..CANVAS_ROWS).any(|row| self.line(row).contains(needle))
    }

    /// Last contrast applied
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Number of completed `send_buffer` calls
    pub fn frames_sent(&self) -> u32 {
        self.frames_sent
    }

    fn font(&self) -> Result<Font, DisplayError> {
        self.font.ok_or(DisplayError::NotInitialized)
    }
}

impl DrawSurface for TextCanvas {
    fn clear_buffer(&mut self) -> Result<(), DisplayError> {
        self.cells = [[b' '; CANVAS_COLS]; CANVAS_ROWS];
        self.lens = [0; CANVAS_ROWS];
        self.highlights = [None; CANVAS_ROWS];
        self.cursor = (0, 0);
        Ok(())
    }

    fn set_font(&mut self, font: Font) -> Result<(), DisplayError> {
        self.font = Some(font);
        Ok(())
    }

    fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), DisplayError> {
        if x > PANEL_WIDTH || y > PANEL_HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.cursor = (x, y);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        let font = self.font()?;
        let row = (self.cursor.1 / font.line_height()) as usize;
        if row >= CANVAS_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }

        let mut col = (self.cursor.0 / font.glyph_width()) as usize;
        for ch in text.chars() {
            // Text past the right edge is clipped, like on the panel
            if col >= CANVAS_COLS {
                break;
            }
            self.cells[row][col] = if ch.is_ascii() { ch as u8 } else { b'?' };
            col += 1;
        }
        self.lens[row] = self.lens[row].max(col as u8);

        let advance = text.chars().count() as u16 * font.glyph_width();
        self.cursor.0 = self.cursor.0.saturating_add(advance).min(PANEL_WIDTH);
        Ok(())
    }

    fn draw_box(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        let font = self.font()?;
        if x + width > PANEL_WIDTH || y + height > PANEL_HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }

        let row = (y / font.line_height()) as usize;
        if row >= CANVAS_ROWS {
            return Err(DisplayError::InvalidCoordinates);
        }

        self.highlights[row] = match self.color {
            DrawColor::On => {
                let start = (x / font.glyph_width()) as u8;
                let end = (x + width)
                    .div_ceil(font.glyph_width())
                    .min(CANVAS_COLS as u16) as u8;
                Some((start, end))
            }
            DrawColor::Off => None,
        };
        Ok(())
    }

    fn set_draw_color(&mut self, color: DrawColor) -> Result<(), DisplayError> {
        self.color = color;
        Ok(())
    }

    fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.contrast = contrast;
        Ok(())
    }

    fn send_buffer(&mut self) -> Result<(), DisplayError> {
        self.frames_sent = self.frames_sent.wrapping_add(1);
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TextCanvas {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TextCanvas[");
        for row in 0..CANVAS_ROWS {
            if row > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", self.line(row));
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceExt;

    fn canvas() -> TextCanvas {
        let mut canvas = TextCanvas::new();
        canvas.set_font(Font::Mono5x8).unwrap();
        canvas
    }

    #[test]
    fn test_print_requires_font() {
        let mut canvas = TextCanvas::new();
        assert_eq!(canvas.print("x"), Err(DisplayError::NotInitialized));
    }

    #[test]
    fn test_print_on_rows() {
        let mut canvas = canvas();
        canvas.print_row(Font::Mono5x8, 0, "Start Timer").unwrap();
        canvas.print_row(Font::Mono5x8, 4, "Contrast").unwrap();
        assert_eq!(canvas.line(0), "Start Timer");
        assert_eq!(canvas.line(4), "Contrast");
        assert_eq!(canvas.line(2), "");
    }

    #[test]
    fn test_cursor_advances_across_prints() {
        let mut canvas = canvas();
        canvas.set_cursor(0, Font::Mono5x8.row_baseline(1)).unwrap();
        canvas.print("Set Timer: ").unwrap();
        canvas.print_int(15).unwrap();
        canvas.print(" min").unwrap();
        assert_eq!(canvas.line(1), "Set Timer: 15 mi");
    }

    #[test]
    fn test_box_highlights_columns() {
        let mut canvas = canvas();
        canvas.set_draw_color(DrawColor::On).unwrap();
        canvas.draw_box(0, 9, PANEL_WIDTH, 9).unwrap();
        assert_eq!(canvas.highlight(1), Some((0, CANVAS_COLS as u8)));
        assert_eq!(canvas.highlighted_row(), Some(1));

        canvas.draw_box(50, 0, 5, 9).unwrap();
        assert_eq!(canvas.highlight(0), Some((10, 11)));
    }

    #[test]
    fn test_box_outside_panel_rejected() {
        let mut canvas = canvas();
        assert_eq!(
            canvas.draw_box(80, 0, 10, 9),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_clear_resets_text_and_highlights() {
        let mut canvas = canvas();
        canvas.print_row(Font::Mono5x8, 0, "abc").unwrap();
        canvas.draw_box(0, 0, 10, 9).unwrap();
        canvas.clear_buffer().unwrap();
        assert_eq!(canvas.line(0), "");
        assert_eq!(canvas.highlighted_row(), None);
    }

    #[test]
    fn test_send_counts_frames() {
        let mut canvas = canvas();
        canvas.send_buffer().unwrap();
        canvas.send_buffer().unwrap();
        assert_eq!(canvas.frames_sent(), 2);
    }
}
