//! Build script for monorail-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates monorail.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Largest panel the frame buffer holds
const MAX_WIDTH: i64 = 256;
const MAX_HEIGHT: i64 = 64;

/// Capacity of the caption strings in firmware
const MAX_LABEL_LEN: usize = 24;

fn main() {
    setup_linker();
    validate_config();
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

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate monorail.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=monorail.toml");

    let config_path = Path::new("monorail.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: monorail.toml not found!                                 ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds monorail.toml at build time.                ║\n\
            ║  Please create one in the monorail-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read monorail.toml                             ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in monorail.toml                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_display(&config, &mut errors);
    validate_render(&config, &mut errors);
    validate_animation(&config, &mut errors);
    validate_text(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in monorail.toml                   ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=monorail.toml validated successfully");
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

/// Look up a section, recording an error if it is missing
fn section<'a>(
    config: &'a toml::Value,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a toml::value::Table> {
    match config.get(name) {
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push(format!("[{}] must be a table", name));
            None
        }
        None => {
            errors.push(format!("Missing [{}] section", name));
            None
        }
    }
}

/// Check an optional integer key against a range
fn check_int(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> Option<i64> {
    match table.get(key) {
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => Some(*v),
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            None
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            None
        }
        None => None,
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = section(config, "display", errors) else {
        return;
    };

    let width = check_int(display, "display", "width", 4, MAX_WIDTH, errors).unwrap_or(MAX_WIDTH);
    let height =
        check_int(display, "display", "height", 8, MAX_HEIGHT, errors).unwrap_or(MAX_HEIGHT);
    let page_rows = check_int(display, "display", "page_rows", 8, MAX_HEIGHT, errors);
    check_int(display, "display", "spi_frequency_hz", 1, 62_500_000, errors);
    check_int(display, "display", "contrast", 0, 255, errors);

    if width % 4 != 0 {
        errors.push("[display] width must be a multiple of 4".to_string());
    }
    if let Some(rows) = page_rows {
        if rows % 8 != 0 || height % rows != 0 {
            errors.push("[display] page_rows must be a multiple of 8 dividing height".to_string());
        }
    }
}

fn validate_render(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(render) = section(config, "render", errors) else {
        return;
    };

    match render.get("mode") {
        Some(toml::Value::String(mode)) => {
            if !["continuous", "paged"].contains(&mode.as_str()) {
                errors.push("[render] mode must be 'continuous' or 'paged'".to_string());
            }
        }
        Some(_) => errors.push("[render] mode must be a string".to_string()),
        None => {}
    }
    check_int(render, "render", "idle_ms", 0, u32::MAX as i64, errors);
}

fn validate_animation(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(animation) = section(config, "animation", errors) else {
        return;
    };

    check_int(animation, "animation", "period_ticks", 1, u32::MAX as i64, errors);
    check_int(animation, "animation", "tick_ms", 1, u32::MAX as i64, errors);
}

fn validate_text(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(text) = section(config, "text", errors) else {
        return;
    };

    for key in ["label", "unit"] {
        match text.get(key) {
            Some(toml::Value::String(s)) if s.len() > MAX_LABEL_LEN => {
                errors.push(format!("[text] {} longer than {} bytes", key, MAX_LABEL_LEN));
            }
            Some(toml::Value::String(s)) if s.contains(['"', '\\']) => {
                errors.push(format!("[text] {} must not contain quotes or escapes", key));
            }
            Some(toml::Value::String(_)) | None => {}
            Some(_) => errors.push(format!("[text] {} must be a string", key)),
        }
    }
}
