//! Board wiring
//!
//! Pin assignments for the controller board (Raspberry Pi Pico):
//!
//! | Function        | GPIO | Notes                        |
//! |-----------------|------|------------------------------|
//! | Heater relay    | 2    | active high                  |
//! | Cleaner relay   | 3    | active high                  |
//! | LCD backlight   | 4    | active high                  |
//! | Encoder A (CLK) | 6    | pull-up                      |
//! | Encoder B (DT)  | 7    | pull-up                      |
//! | Encoder button  | 8    | pull-up, pressed = low       |
//! | LCD CE          | 9    | SPI1                         |
//! | LCD CLK         | 10   | SPI1 SCK                     |
//! | LCD DIN         | 11   | SPI1 TX                      |
//! | LCD DC          | 12   |                              |
//! | 1-Wire DQ       | 15   | DS18B20, 4.7k pull-up to 3V3 |

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_time::Delay;
use embassy_rp::spi::{Blocking, Spi};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};

use usonic_core::Controller;
use usonic_display::Pcd8544;
use usonic_drivers::output::GpioOutput;
use usonic_drivers::sensor::{BackgroundSensor, OneWireThermometer};
use usonic_drivers::storage::EmulatedEeprom;
use usonic_hal_rp2040::{FlashPage, OneWirePin, RpOutput};

/// Emulated EEPROM size; covers the three settings slots
pub const STORE_LEN: usize = 32;

/// LCD SPI clock (Hz)
pub const LCD_SPI_HZ: u32 = 4_000_000;

pub type Store = EmulatedEeprom<FlashPage<'static>, STORE_LEN>;
pub type Sensor = BackgroundSensor<OneWireThermometer<OneWirePin<'static>, Delay>>;
pub type Line = GpioOutput<RpOutput<'static>>;
pub type Panel = Pcd8544<
    ExclusiveDevice<Spi<'static, SPI1, Blocking>, Output<'static>, NoDelay>,
    Output<'static>,
>;

/// The controller as wired on this board
pub type BoardController = Controller<Store, Sensor, Line, Line, Line>;
