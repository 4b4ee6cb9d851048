//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in usonic-core for the cleaner's hardware:
//!
//! - GPIO actuator outputs (heater relay, cleaner relay, backlight)
//! - Rotary encoder and push-button decoding
//! - DS18B20 1-Wire temperature sensor (`one-wire-bus` + `ds18b20`)
//! - EEPROM emulation on a flash page

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod output;
pub mod sensor;
pub mod storage;
