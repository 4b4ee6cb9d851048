//! Build script for usonic-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates usonic.toml and bakes it into a `ControllerConfig` constant

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Controller keys with their accepted ranges
const CONTROLLER_KEYS: &[(&str, i64, i64)] = &[
    ("temp_offset_f", 0, 255),
    ("long_press_ms", 100, 10_000),
    ("tick_ms", 1, 1000),
    ("clicks_per_step", 1, 255),
    ("debounce_ms", 0, 1000),
];

fn main() {
    setup_linker();
    let values = validate_config();
    generate_config(&values);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate usonic.toml and return the controller values in key order
fn validate_config() -> Vec<i64> {
    println!("cargo:rerun-if-changed=usonic.toml");

    let config_path = Path::new("usonic.toml");
    if !config_path.exists() {
        fail("usonic.toml not found", &["Create one in the usonic-firmware directory."]);
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read usonic.toml", &[&e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail("Invalid TOML syntax in usonic.toml", &[&e.to_string()]),
    };

    let controller = match config.get("controller") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => fail("Invalid usonic.toml", &["[controller] must be a table"]),
        None => fail("Invalid usonic.toml", &["missing [controller] section"]),
    };

    let mut errors = Vec::new();
    let mut values = Vec::new();

    for key in controller.keys() {
        if !CONTROLLER_KEYS.iter().any(|(k, _, _)| k == key) {
            errors.push(format!("[controller] unknown key '{}'", key));
        }
    }

    for &(key, min, max) in CONTROLLER_KEYS {
        match controller.get(key) {
            Some(toml::Value::Integer(v)) if (min..=max).contains(v) => values.push(*v),
            Some(toml::Value::Integer(_)) => {
                errors.push(format!("[controller] {} must be {}-{}", key, min, max));
            }
            Some(_) => errors.push(format!("[controller] {} must be an integer", key)),
            None => errors.push(format!("[controller] missing '{}'", key)),
        }
    }

    if !errors.is_empty() {
        let lines: Vec<&str> = errors.iter().map(String::as_str).collect();
        fail("Invalid controller configuration", &lines);
    }

    values
}

/// Write the `CONTROLLER_CONFIG` constant included by `src/config.rs`
fn generate_config(values: &[i64]) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("controller_config.rs")).unwrap();

    writeln!(f, "/// Controller parameters from usonic.toml").unwrap();
    writeln!(f, "pub const CONTROLLER_CONFIG: ControllerConfig = ControllerConfig {{").unwrap();
    for ((key, _, _), value) in CONTROLLER_KEYS.iter().zip(values) {
        writeln!(f, "    {}: {},", key, value).unwrap();
    }
    writeln!(f, "}};").unwrap();
}

fn fail(title: &str, lines: &[&str]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|l| format!("║  • {:<62} ║", l))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
