//! Monorail - SSD1322 Speed Display Firmware
//!
//! Main firmware binary for RP2040 boards driving a 256x64 SSD1322 OLED
//! over SPI. Shows the c-base shape next to an animated "Monorail speed"
//! readout, or draws the c-base logo page by page.
//!
//! Wiring (SPI1):
//!
//! | Signal | Pin    |
//! |--------|--------|
//! | SCK    | GPIO14 |
//! | MOSI   | GPIO15 |
//! | CS     | GPIO13 |
//! | DC     | GPIO20 |
//! | RST    | GPIO21 |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use monorail_display::Ssd1322;

mod assets;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Monorail firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config();

    let mut spi_config = spi::Config::default();
    spi_config.frequency = config.panel.spi_frequency_hz;
    let spi = Spi::new_txonly(p.SPI1, p.PIN_14, p.PIN_15, p.DMA_CH0, spi_config);

    let cs = Output::new(p.PIN_13, Level::High);
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);

    let display: tasks::Display = Ssd1322::new(spi, dc, cs, rst, Delay, &config.panel);
    info!(
        "SSD1322 on SPI1 at {} Hz, columns {:?}",
        config.panel.spi_frequency_hz,
        display.columns()
    );

    spawner.spawn(tasks::render_task(display, config)).unwrap();

    info!("Render task spawned, firmware running");

    // Main task has nothing else to do - all work happens in the render task
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
