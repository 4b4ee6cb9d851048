//! PCD8544 LCD driver
//!
//! Driver for the 84x48 Nokia 5110 panel over SPI, with a local frame
//! buffer. Text and boxes are rasterised with embedded-graphics.

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::surface::{DisplayError, DrawColor, DrawSurface, Font, PANEL_HEIGHT, PANEL_WIDTH};

const WIDTH: usize = PANEL_WIDTH as usize;
const BANKS: usize = PANEL_HEIGHT as usize / 8;

/// PCD8544 commands
#[allow(dead_code)]
mod cmd {
    pub const FUNCTION_SET: u8 = 0x20;
    pub const EXTENDED: u8 = 0x01;
    pub const DISPLAY_NORMAL: u8 = 0x0C;
    pub const SET_Y: u8 = 0x40;
    pub const SET_X: u8 = 0x80;
    pub const TEMP_COEFF: u8 = 0x04;
    pub const BIAS: u8 = 0x10;
    pub const SET_VOP: u8 = 0x80;
}

/// Bias system 1:48, the usual setting for these modules
const BIAS_MUX_48: u8 = 0x04;

/// PCD8544 panel driver
pub struct Pcd8544<SPI, DC> {
    spi: SPI,
    dc: DC,
    /// Frame buffer, one byte per 8 vertical pixels
    buffer: [[u8; WIDTH]; BANKS],
    cursor: Point,
    color: DrawColor,
    font: Option<Font>,
}

impl<SPI, DC> Pcd8544<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new driver; call [`init`](Self::init) before drawing
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self {
            spi,
            dc,
            buffer: [[0; WIDTH]; BANKS],
            cursor: Point::zero(),
            color: DrawColor::On,
            font: None,
        }
    }

    /// Run the power-up sequence with the given contrast
    pub fn init(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.command(&[
            cmd::FUNCTION_SET | cmd::EXTENDED,
            cmd::SET_VOP | vop(contrast),
            cmd::TEMP_COEFF,
            cmd::BIAS | BIAS_MUX_48,
            cmd::FUNCTION_SET,
            cmd::DISPLAY_NORMAL,
        ])?;
        self.send_buffer()
    }

    fn command(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Communication)?;
        self.spi
            .write(bytes)
            .map_err(|_| DisplayError::Communication)
    }

    fn style_color(&self) -> BinaryColor {
        match self.color {
            DrawColor::On => BinaryColor::On,
            DrawColor::Off => BinaryColor::Off,
        }
    }
}

/// Map the 0-255 contrast byte onto the 7-bit operating voltage register
fn vop(contrast: u8) -> u8 {
    contrast >> 1
}

impl<SPI, DC> OriginDimensions for Pcd8544<SPI, DC> {
    fn size(&self) -> Size {
        Size::new(PANEL_WIDTH as u32, PANEL_HEIGHT as u32)
    }
}

impl<SPI, DC> DrawTarget for Pcd8544<SPI, DC> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (x, y) = (point.x, point.y);
            if x < 0 || y < 0 || x >= PANEL_WIDTH as i32 || y >= PANEL_HEIGHT as i32 {
                continue;
            }
            let bank = &mut self.buffer[y as usize / 8][x as usize];
            let mask = 1u8 << (y as usize % 8);
            match color {
                BinaryColor::On => *bank |= mask,
                BinaryColor::Off => *bank &= !mask,
            }
        }
        Ok(())
    }
}

impl<SPI, DC> DrawSurface for Pcd8544<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    fn clear_buffer(&mut self) -> Result<(), DisplayError> {
        for bank in self.buffer.iter_mut() {
            bank.fill(0);
        }
        self.cursor = Point::zero();
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
        self.cursor = Point::new(x as i32, y as i32);
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        let font = self.font.ok_or(DisplayError::NotInitialized)?;
        let mono = match font {
            Font::Mono5x8 => &FONT_5X8,
        };
        let style = MonoTextStyle::new(mono, self.style_color());
        self.cursor = Text::new(text, self.cursor, style)
            .draw(self)
            .unwrap_or_else(|e| match e {});
        Ok(())
    }

    fn draw_box(&mut self, x: u16, y: u16, width: u16, height: u16) -> Result<(), DisplayError> {
        if x + width > PANEL_WIDTH || y + height > PANEL_HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }
        let area = Rectangle::new(
            Point::new(x as i32, y as i32),
            Size::new(width as u32, height as u32),
        );
        area.into_styled(PrimitiveStyle::with_fill(self.style_color()))
            .draw(self)
            .unwrap_or_else(|e| match e {});
        Ok(())
    }

    fn set_draw_color(&mut self, color: DrawColor) -> Result<(), DisplayError> {
        self.color = color;
        Ok(())
    }

    fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.command(&[
            cmd::FUNCTION_SET | cmd::EXTENDED,
            cmd::SET_VOP | vop(contrast),
            cmd::FUNCTION_SET,
        ])
    }

    fn send_buffer(&mut self) -> Result<(), DisplayError> {
        self.command(&[cmd::SET_X, cmd::SET_Y])?;
        self.dc.set_high().map_err(|_| DisplayError::Communication)?;
        for bank in 0..BANKS {
            let row = self.buffer[bank];
            self.spi
                .write(&row)
                .map_err(|_| DisplayError::Communication)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vop_stays_in_register_range() {
        assert_eq!(vop(0), 0);
        assert_eq!(vop(64), 32);
        assert_eq!(vop(255), 0x7F);
    }
}
