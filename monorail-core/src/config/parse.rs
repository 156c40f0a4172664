//! Simple TOML parser for display configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `monorail.toml`. It does NOT support the full TOML spec. The build script
//! validates the shipped file with the real `toml` crate.
//!
//! Supported features:
//! - Key = value pairs (string, integer with optional `_` separators)
//! - [section] headers
//! - Comments (# ...), including trailing comments
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings and escapes
//! - Dotted keys

use heapless::String as HString;

use super::types::{DisplayConfig, RenderMode, MAX_LABEL_LEN};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid for the current section
    UnknownKey,
    /// Value does not parse as the expected type
    InvalidValue,
    /// String longer than the label capacity
    TooLong,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Render,
    Animation,
    Text,
}

/// Parse TOML configuration into DisplayConfig
///
/// Keys that are absent keep their default values.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(strip_comment(line))?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

/// Parse a "[name]" header
fn parse_section_header(line: &str) -> Result<Section, ParseError> {
    let name = line
        .strip_prefix('[')
        .and_then(|l| l.strip_suffix(']'))
        .ok_or(ParseError::InvalidSection)?;

    match name.trim() {
        "display" => Ok(Section::Display),
        "render" => Ok(Section::Render),
        "animation" => Ok(Section::Animation),
        "text" => Ok(Section::Text),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Drop a trailing comment that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return line[..i].trim(),
            _ => {}
        }
    }
    line.trim()
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(&line[eq_pos + 1..]);

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Result<HString<MAX_LABEL_LEN>, ParseError> {
    let inner = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)?;
    HString::try_from(inner).map_err(|_| ParseError::TooLong)
}

/// Parse an integer value, allowing `_` digit separators
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits: HString<24> = HString::new();
    for ch in value.chars().filter(|&c| c != '_') {
        digits.push(ch).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse render mode
fn parse_mode(value: &str) -> Result<RenderMode, ParseError> {
    match parse_string(value)?.as_str() {
        "continuous" | "Continuous" => Ok(RenderMode::Continuous),
        "paged" | "Paged" => Ok(RenderMode::Paged),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Apply one key/value pair to the section being parsed
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DisplayConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => return Err(ParseError::UnknownKey),
        Section::Display => {
            let panel = &mut config.panel;
            match key {
                "width" => panel.width = parse_int(value)?,
                "height" => panel.height = parse_int(value)?,
                "page_rows" => panel.page_rows = parse_int(value)?,
                "spi_frequency_hz" => panel.spi_frequency_hz = parse_int(value)?,
                "contrast" => panel.contrast = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
        Section::Render => match key {
            "mode" => config.render.mode = parse_mode(value)?,
            "idle_ms" => config.render.idle_ms = parse_int(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Animation => match key {
            "period_ticks" => config.animation.period_ticks = parse_int(value)?,
            "tick_ms" => config.animation.tick_ms = parse_int(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
        Section::Text => match key {
            "label" => config.text.label = parse_string(value)?,
            "unit" => config.text.unit = parse_string(value)?,
            _ => return Err(ParseError::UnknownKey),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
# Monorail display
[display]
width = 256
height = 64
page_rows = 16
spi_frequency_hz = 10_000_000
contrast = 159

[render]
mode = "paged"   # one-shot logo
idle_ms = 250

[animation]
period_ticks = 500
tick_ms = 20

[text]
label = "Speed # now"
unit = "m/s"
"#;

    #[test]
    fn test_parse_full_file() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.panel.width, 256);
        assert_eq!(config.panel.height, 64);
        assert_eq!(config.panel.page_rows, 16);
        assert_eq!(config.panel.spi_frequency_hz, 10_000_000);
        assert_eq!(config.panel.contrast, 159);
        assert_eq!(config.render.mode, RenderMode::Paged);
        assert_eq!(config.render.idle_ms, 250);
        assert_eq!(config.animation.period_ticks, 500);
        assert_eq!(config.animation.tick_ms, 20);
        assert_eq!(config.text.label.as_str(), "Speed # now");
        assert_eq!(config.text.unit.as_str(), "m/s");
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_firmware_file_matches_defaults() {
        let shipped = include_str!("../../../monorail-firmware/monorail.toml");
        let config = parse_config(shipped).unwrap();
        assert_eq!(config, DisplayConfig::default());
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[render]\nmode = \"continuous\"\n").unwrap();
        assert_eq!(config, DisplayConfig::default());
        assert_eq!(parse_config("").unwrap(), DisplayConfig::default());
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            parse_config("[stepper]\nrpm = 3\n"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(parse_config("[display\n"), Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_config("[display]\ncolour = 1\n"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(parse_config("width = 1\n"), Err(ParseError::UnknownKey));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[display]\ncontrast = 300\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[render]\nmode = \"sometimes\"\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[text]\nlabel = unquoted\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("[text]\nlabel\n"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_label_too_long() {
        assert_eq!(
            parse_config("[text]\nlabel = \"a label that is far too long to fit\"\n"),
            Err(ParseError::TooLong)
        );
    }
}
