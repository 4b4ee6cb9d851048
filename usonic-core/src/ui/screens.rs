//! Screen layouts for the 84x48 panel
//!
//! Text rows follow the font's line pitch; the selected menu row and the
//! digit under the cursor are drawn inverted.

use usonic_display::{DisplayError, DrawColor, DrawSurface, Font, SurfaceExt, PANEL_WIDTH};

use crate::editor::{TemperatureEditor, TimerPicker};
use crate::state::MenuItem;

/// Font used for every screen
pub const FONT: Font = Font::Mono5x8;

/// Column of the first temperature digit ("Set Temp: " is ten glyphs)
const DIGITS_COL: u8 = 10;

/// Row used for values on two-line screens
const VALUE_ROW: u8 = 2;

fn begin<D: DrawSurface + ?Sized>(surface: &mut D) -> Result<(), DisplayError> {
    surface.clear_buffer()?;
    surface.set_font(FONT)?;
    surface.set_draw_color(DrawColor::On)
}

/// Draw an inverted cell behind the next text
fn invert_cell<D: DrawSurface + ?Sized>(
    surface: &mut D,
    x: u16,
    row: u8,
    width: u16,
) -> Result<(), DisplayError> {
    surface.set_draw_color(DrawColor::On)?;
    surface.draw_box(x, FONT.row_top(row), width, FONT.line_height())?;
    surface.set_draw_color(DrawColor::Off)
}

/// Menu list with the selected item inverted
pub fn draw_menu<D: DrawSurface + ?Sized>(
    surface: &mut D,
    selected: MenuItem,
) -> Result<(), DisplayError> {
    begin(surface)?;
    for (row, item) in MenuItem::ALL.iter().enumerate() {
        let row = row as u8;
        if *item == selected {
            invert_cell(surface, 0, row, PANEL_WIDTH)?;
        }
        surface.print_row(FONT, row, item.label())?;
        surface.set_draw_color(DrawColor::On)?;
    }
    surface.send_buffer()
}

/// Duration picker
pub fn draw_timer<D: DrawSurface + ?Sized>(
    surface: &mut D,
    picker: &TimerPicker,
) -> Result<(), DisplayError> {
    begin(surface)?;
    surface.print_row(FONT, 0, "Set Timer:")?;
    surface.set_cursor(0, FONT.row_baseline(VALUE_ROW))?;
    surface.print_fmt(format_args!("{} min", picker.minutes()))?;
    surface.send_buffer()
}

/// Temperature digits with the cursor digit inverted
pub fn draw_temperature<D: DrawSurface + ?Sized>(
    surface: &mut D,
    editor: &TemperatureEditor,
) -> Result<(), DisplayError> {
    begin(surface)?;
    surface.print_row(FONT, 0, "Set Temp: ")?;
    for (i, digit) in editor.digits().iter().enumerate() {
        let x = FONT.column_x(DIGITS_COL + i as u8);
        if i == editor.cursor() {
            invert_cell(surface, x, 0, FONT.glyph_width())?;
        }
        surface.set_cursor(x, FONT.row_baseline(0))?;
        surface.print_int(i32::from(*digit))?;
        surface.set_draw_color(DrawColor::On)?;
    }
    surface.print("F")?;
    surface.send_buffer()
}

/// Contrast value; the caller applies the contrast itself
pub fn draw_contrast<D: DrawSurface + ?Sized>(
    surface: &mut D,
    contrast: u8,
) -> Result<(), DisplayError> {
    begin(surface)?;
    surface.print_row(FONT, 0, "Contrast: ")?;
    surface.print_int(i32::from(contrast))?;
    surface.send_buffer()
}

/// Network placeholder
pub fn draw_network<D: DrawSurface + ?Sized>(surface: &mut D) -> Result<(), DisplayError> {
    begin(surface)?;
    surface.print_row(FONT, 0, "Network")?;
    surface.print_row(FONT, VALUE_ROW, "Not available")?;
    surface.print_row(FONT, VALUE_ROW + 1, "Click to return")?;
    surface.send_buffer()
}

/// Run status: time left, bath and target temperature
pub fn draw_run<D: DrawSurface + ?Sized>(
    surface: &mut D,
    remaining_s: u32,
    temperature_x10: Option<i16>,
    set_f: u8,
) -> Result<(), DisplayError> {
    begin(surface)?;
    surface.set_cursor(0, FONT.row_baseline(0))?;
    surface.print_fmt(format_args!(
        "Time Left: {}:{:02}",
        remaining_s / 60,
        remaining_s % 60
    ))?;

    surface.set_cursor(0, FONT.row_baseline(VALUE_ROW))?;
    match temperature_x10 {
        Some(t) => {
            let sign = if t < 0 { "-" } else { "" };
            let t = t.unsigned_abs();
            surface.print_fmt(format_args!("Temp: {}{}.{}F", sign, t / 10, t % 10))?;
        }
        None => surface.print("Temp: --")?,
    }

    surface.set_cursor(0, FONT.row_baseline(VALUE_ROW + 1))?;
    surface.print_fmt(format_args!("Target: {}F", set_f))?;
    surface.send_buffer()
}
