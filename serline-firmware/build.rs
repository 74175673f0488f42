//! Build script for serline-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates console.toml at compile time
//! - Generates the console settings as Rust constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const WAIT_MODES: [&str; 3] = ["block", "poll", "timeout"];
const PARITIES: [&str; 3] = ["none", "even", "odd"];

fn main() {
    setup_linker();
    let settings = validate_config();
    generate_constants(&settings);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated `[console]` settings
struct Settings {
    name: String,
    board: String,
    baudrate: u32,
    data_bits: u8,
    parity: String,
    stop_bits: u8,
    wait: String,
    timeout_ms: u64,
    poll_interval_ms: u64,
}

/// Validate console.toml configuration at compile time
fn validate_config() -> Settings {
    // Re-run if console.toml changes
    println!("cargo:rerun-if-changed=console.toml");

    let config_path = Path::new("console.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: console.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a console.toml configuration file.        ║\n\
            ║  Please create one in the serline-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read console.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in console.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let settings = validate_console(&config);
    println!("cargo:warning=console.toml validated successfully");
    settings
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn report_errors(title: &str, errors: &[String]) {
    if !errors.is_empty() {
        fail(title, errors);
    }
}

fn fail(title: &str, errors: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

fn string_field(
    table: &toml::value::Table,
    key: &str,
    default: Option<&str>,
    errors: &mut Vec<String>,
) -> String {
    match table.get(key) {
        Some(toml::Value::String(s)) if !s.is_empty() => s.clone(),
        Some(toml::Value::String(_)) => {
            errors.push(format!("[console] '{}' must not be empty", key));
            String::new()
        }
        Some(_) => {
            errors.push(format!("[console] '{}' must be a string", key));
            String::new()
        }
        None => match default {
            Some(d) => d.to_string(),
            None => {
                errors.push(format!("[console] missing '{}'", key));
                String::new()
            }
        },
    }
}

fn int_field(
    table: &toml::value::Table,
    key: &str,
    default: Option<i64>,
    range: (i64, i64),
    errors: &mut Vec<String>,
) -> i64 {
    let value = match table.get(key) {
        Some(toml::Value::Integer(v)) => *v,
        Some(_) => {
            errors.push(format!("[console] '{}' must be an integer", key));
            return range.0;
        }
        None => match default {
            Some(d) => d,
            None => {
                errors.push(format!("[console] missing '{}'", key));
                return range.0;
            }
        },
    };

    if value < range.0 || value > range.1 {
        errors.push(format!(
            "[console] '{}' must be {}-{}",
            key, range.0, range.1
        ));
    }
    value
}

/// Validate the [console] section
fn validate_console(config: &toml::Value) -> Settings {
    let table = match config.get("console") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            fail(
                "Invalid console configuration",
                &["[console] must be a table".to_string()],
            );
        }
        None => {
            fail(
                "Missing required sections in console.toml",
                &["Missing [console] section".to_string()],
            );
        }
    };

    let mut errors = Vec::new();

    let name = string_field(table, "name", None, &mut errors);
    let board = string_field(table, "board", Some("unknown"), &mut errors);
    let baudrate = int_field(table, "baudrate", None, (1, u32::MAX as i64), &mut errors);
    let data_bits = int_field(table, "data_bits", Some(8), (7, 8), &mut errors);
    let stop_bits = int_field(table, "stop_bits", Some(1), (1, 2), &mut errors);
    let timeout_ms = int_field(table, "timeout_ms", Some(1000), (1, 3_600_000), &mut errors);
    let poll_interval_ms =
        int_field(table, "poll_interval_ms", Some(1), (1, 60_000), &mut errors);

    let parity = string_field(table, "parity", Some("none"), &mut errors);
    if !parity.is_empty() && !PARITIES.contains(&parity.as_str()) {
        errors.push("[console] parity must be 'none', 'even', or 'odd'".to_string());
    }

    let mut wait = string_field(table, "wait", Some("block"), &mut errors);
    if !wait.is_empty() && !WAIT_MODES.contains(&wait.as_str()) {
        errors.push("[console] wait must be 'block', 'poll', or 'timeout'".to_string());
    }

    report_errors("Invalid console configuration", &errors);

    if wait == "block" && env::var_os("CARGO_FEATURE_EMULATED").is_some() {
        println!("cargo:warning=emulated build: console wait policy forced to 'poll'");
        wait = "poll".to_string();
    }

    Settings {
        name,
        board,
        baudrate: baudrate as u32,
        data_bits: data_bits as u8,
        parity,
        stop_bits: stop_bits as u8,
        wait,
        timeout_ms: timeout_ms as u64,
        poll_interval_ms: poll_interval_ms as u64,
    }
}

/// Write `console_config.rs` into OUT_DIR
fn generate_constants(settings: &Settings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let data_bits = match settings.data_bits {
        7 => "serline_hal::DataBits::Seven",
        _ => "serline_hal::DataBits::Eight",
    };
    let parity = match settings.parity.as_str() {
        "even" => "serline_hal::Parity::Even",
        "odd" => "serline_hal::Parity::Odd",
        _ => "serline_hal::Parity::None",
    };
    let stop_bits = match settings.stop_bits {
        2 => "serline_hal::StopBits::Two",
        _ => "serline_hal::StopBits::One",
    };
    let wait = match settings.wait.as_str() {
        "poll" => "serline_core::WaitPolicy::Poll".to_string(),
        "timeout" => format!(
            "serline_core::WaitPolicy::Timeout(embassy_time::Duration::from_millis({}))",
            settings.timeout_ms
        ),
        _ => "serline_core::WaitPolicy::Block".to_string(),
    };

    let source = format!(
        "// Generated by build.rs from console.toml\n\
         pub const NAME: &str = {:?};\n\
         pub const BOARD: &str = {:?};\n\
         pub const BAUDRATE: u32 = {};\n\
         pub const DATA_BITS: serline_hal::DataBits = {};\n\
         pub const PARITY: serline_hal::Parity = {};\n\
         pub const STOP_BITS: serline_hal::StopBits = {};\n\
         pub const WAIT: serline_core::WaitPolicy = {};\n\
         pub const POLL_INTERVAL_MS: u64 = {};\n",
        settings.name,
        settings.board,
        settings.baudrate,
        data_bits,
        parity,
        stop_bits,
        wait,
        settings.poll_interval_ms,
    );

    fs::write(out_dir.join("console_config.rs"), source).unwrap();
}
