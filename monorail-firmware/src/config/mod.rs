//! Configuration loading
//!
//! The configuration is compiled in from `monorail.toml` and parsed by the
//! no_std parser in `monorail-core`. Any parse or validation failure falls
//! back to the built-in defaults so the display always comes up.

use defmt::*;

use monorail_core::config::{parse_config, DisplayConfig};

/// Embedded configuration (compiled into firmware)
/// Edit monorail.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../monorail.toml");

/// Load the embedded configuration
pub fn load_config() -> DisplayConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            // build.rs validates the file, so this only fires on parser drift
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            return DisplayConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        error!("Embedded config rejected: {:?}", e);
        error!("Using default configuration");
        return DisplayConfig::default();
    }

    log_config_summary(&config);
    config
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &DisplayConfig) {
    info!("Configuration loaded successfully");
    debug!(
        "  panel {}x{}, {} rows per page",
        config.panel.width, config.panel.height, config.panel.page_rows
    );
    debug!("  mode {:?}", config.render.mode);
    debug!(
        "  period {} ticks of {} ms",
        config.animation.period_ticks, config.animation.tick_ms
    );
}
