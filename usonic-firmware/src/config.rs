//! Build-time configuration
//!
//! `build.rs` validates `usonic.toml` and generates the constant below.

use usonic_core::config::ControllerConfig;

include!(concat!(env!("OUT_DIR"), "/controller_config.rs"));
