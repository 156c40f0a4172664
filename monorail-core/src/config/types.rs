//! Configuration type definitions
//!
//! These types mirror the sections of `monorail.toml`. Defaults match the
//! shipped file, so a board with a broken config still boots into the
//! continuous speed readout.

use heapless::String;

use crate::animation::{DEFAULT_PERIOD_TICKS, DEFAULT_TICK_MS};

/// Maximum label length
pub const MAX_LABEL_LEN: usize = 24;

/// Largest panel the frame buffer holds
pub const MAX_PANEL_WIDTH: u16 = 256;
pub const MAX_PANEL_HEIGHT: u16 = 64;

/// Pixels per controller column address; panel widths must be a multiple
pub const COLUMN_PIXELS: u16 = 4;

/// Rows per controller page; strip heights must be a multiple of this
pub const PAGE_ALIGN: u16 = 8;

/// Render loop variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderMode {
    /// Redraw the speed readout into a full frame buffer as fast as possible
    #[default]
    Continuous,
    /// Draw the logo strip by strip, then idle
    Paged,
}

/// Display panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Strip height used by paged rendering
    pub page_rows: u16,
    /// SPI clock
    pub spi_frequency_hz: u32,
    /// Contrast current (0-255)
    pub contrast: u8,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 64,
            page_rows: 16,
            spi_frequency_hz: 10_000_000,
            contrast: 159,
        }
    }
}

/// Render loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderConfig {
    /// Loop variant
    pub mode: RenderMode,
    /// Pause after each paged draw
    pub idle_ms: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::Continuous,
            idle_ms: 100,
        }
    }
}

/// Animation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationConfig {
    /// Sawtooth period in ticks
    pub period_ticks: u32,
    /// Tick length in milliseconds
    pub tick_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            period_ticks: DEFAULT_PERIOD_TICKS,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

/// Static text labels
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextConfig {
    /// Caption above the readout
    pub label: String<MAX_LABEL_LEN>,
    /// Unit next to the readout
    pub unit: String<MAX_LABEL_LEN>,
}

impl Default for TextConfig {
    fn default() -> Self {
        let mut label = String::new();
        let _ = label.push_str("Monorail speed");
        let mut unit = String::new();
        let _ = unit.push_str("mm/s");
        Self { label, unit }
    }
}

/// Complete display configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub panel: PanelConfig,
    pub render: RenderConfig,
    pub animation: AnimationConfig,
    pub text: TextConfig,
}

/// Semantic configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Panel width or height is zero
    EmptyPanel,
    /// Panel larger than the frame buffer
    PanelTooLarge,
    /// Width is not a whole number of controller columns
    UnalignedWidth,
    /// `page_rows` is zero, not page aligned, or does not divide the height
    InvalidPageRows,
    /// `period_ticks` is zero
    ZeroPeriod,
    /// `tick_ms` is zero
    ZeroTick,
}

impl DisplayConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let panel = &self.panel;
        if panel.width == 0 || panel.height == 0 {
            return Err(ConfigError::EmptyPanel);
        }
        if panel.width > MAX_PANEL_WIDTH || panel.height > MAX_PANEL_HEIGHT {
            return Err(ConfigError::PanelTooLarge);
        }
        if panel.width % COLUMN_PIXELS != 0 {
            return Err(ConfigError::UnalignedWidth);
        }
        if panel.page_rows == 0
            || panel.page_rows % PAGE_ALIGN != 0
            || panel.height % panel.page_rows != 0
        {
            return Err(ConfigError::InvalidPageRows);
        }
        if self.animation.period_ticks == 0 {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.animation.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DisplayConfig::new();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.render.mode, RenderMode::Continuous);
        assert_eq!(config.text.label.as_str(), "Monorail speed");
        assert_eq!(config.text.unit.as_str(), "mm/s");
    }

    #[test]
    fn test_page_rows_must_divide_height() {
        let mut config = DisplayConfig::new();
        config.panel.page_rows = 24;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPageRows));

        config.panel.page_rows = 12;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPageRows));

        config.panel.page_rows = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidPageRows));

        config.panel.page_rows = 64;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_timing_rejected() {
        let mut config = DisplayConfig::new();
        config.animation.period_ticks = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPeriod));

        let mut config = DisplayConfig::new();
        config.animation.tick_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTick));
    }

    #[test]
    fn test_empty_panel_rejected() {
        let mut config = DisplayConfig::new();
        config.panel.height = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyPanel));
    }

    #[test]
    fn test_panel_must_fit_frame_buffer() {
        let mut config = DisplayConfig::new();
        config.panel.width = 260;
        assert_eq!(config.validate(), Err(ConfigError::PanelTooLarge));

        let mut config = DisplayConfig::new();
        config.panel.height = 128;
        assert_eq!(config.validate(), Err(ConfigError::PanelTooLarge));
    }

    #[test]
    fn test_width_must_be_whole_columns() {
        let mut config = DisplayConfig::new();
        config.panel.width = 254;
        assert_eq!(config.validate(), Err(ConfigError::UnalignedWidth));

        config.panel.width = 128;
        assert_eq!(config.validate(), Ok(()));
    }
}
