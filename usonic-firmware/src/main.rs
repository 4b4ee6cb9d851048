//! uSonic - Heated Ultrasonic Cleaner Firmware
//!
//! Main firmware binary for RP2040-based cleaner controllers. A rotary
//! encoder drives a menu on a Nokia 5110 panel; a timed run alternates the
//! heater and the ultrasonic transducer around the set temperature.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::{block_for, Delay, Duration};
use embedded_hal_bus::spi::ExclusiveDevice;
use {defmt_rtt as _, panic_probe as _};

use usonic_core::actuator::ActuatorController;
use usonic_core::Controller;
use usonic_display::Pcd8544;
use usonic_drivers::output::GpioOutput;
use usonic_drivers::sensor::{BackgroundSensor, OneWireThermometer, DEFAULT_MAX_POLLS};
use usonic_drivers::storage::EmulatedEeprom;
use usonic_hal_rp2040::{FlashPage, OneWirePin, RpInput, RpOutput};

use crate::board::{BoardController, Panel, Sensor, Store, LCD_SPI_HZ};
use crate::config::CONTROLLER_CONFIG;

mod board;
mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("uSonic firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");
    info!("Config: {}", CONTROLLER_CONFIG);

    // Settings page in the last flash sector
    let mut store: Store = EmulatedEeprom::new(FlashPage::new(p.FLASH));
    if let Err(e) = store.load() {
        warn!("Settings page unreadable ({}), starting blank", e);
    }

    // Bath sensor on GPIO15; one blocking conversion so the first run
    // starts with a reading
    let thermometer = match OneWireThermometer::new(OneWirePin::new(p.PIN_15), Delay) {
        Ok(thermometer) => thermometer,
        Err(e) => defmt::panic!("1-Wire bus unusable: {}", e),
    };
    let mut sensor: Sensor = BackgroundSensor::new(thermometer, DEFAULT_MAX_POLLS);
    let tick = Duration::from_millis(u64::from(CONTROLLER_CONFIG.tick_ms));
    match sensor.measure_blocking(|| block_for(tick)) {
        Ok(temp_x10) => info!("Bath at {} (0.1F)", temp_x10),
        Err(e) => warn!("Temperature sensor not ready: {}", e),
    }

    // Heater GPIO2, cleaner GPIO3, backlight GPIO4
    let actuators = ActuatorController::new(
        GpioOutput::new_active_high(RpOutput::new(p.PIN_2)),
        GpioOutput::new_active_high(RpOutput::new(p.PIN_3)),
        GpioOutput::new_active_high(RpOutput::new(p.PIN_4)),
    );

    let controller: BoardController =
        Controller::new(CONTROLLER_CONFIG, store, sensor, actuators);
    info!("Controller initialized");

    // Nokia 5110 on SPI1: CE GPIO9, CLK GPIO10, DIN GPIO11, DC GPIO12
    let mut spi_config = spi::Config::default();
    spi_config.frequency = LCD_SPI_HZ;
    let bus = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, spi_config);
    let ce = Output::new(p.PIN_9, Level::High);
    let dc = Output::new(p.PIN_12, Level::Low);
    let device = ExclusiveDevice::new_no_delay(bus, ce).unwrap_or_else(|e| match e {});

    let mut panel: Panel = Pcd8544::new(device, dc);
    if let Err(e) = panel.init(controller.settings().contrast) {
        warn!("Panel init failed: {}", e);
    }
    info!("Panel initialized");

    // Encoder A GPIO6, B GPIO7, button GPIO8
    let encoder_a = RpInput::pull_up(p.PIN_6);
    let encoder_b = RpInput::pull_up(p.PIN_7);
    let button = RpInput::pull_up(p.PIN_8);

    // Spawn tasks
    spawner
        .spawn(tasks::input_task(encoder_a, encoder_b, button))
        .unwrap();
    spawner
        .spawn(tasks::controller_task(controller, panel))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
