//! Render task
//!
//! Owns the display and drives the render loop:
//! - Brings the panel up, retrying a failed init a few times
//! - Continuous mode: redraws the readout back to back, yielding between
//!   frames so the executor stays responsive
//! - Paged mode: draws the logo strip by strip, then idles
//!
//! A frame that fails to reach the panel is dropped and the loop carries on.

use defmt::*;
use embassy_futures::yield_now;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Async, Spi};
use embassy_time::{Delay, Duration, Instant, Timer};

use monorail_core::config::{DisplayConfig, RenderMode};
use monorail_core::traits::Clock;
use monorail_core::{init_with_retry, Frame, InitRetry, RenderLoop};
use monorail_display::Ssd1322;

use crate::assets::ASSETS;

/// Concrete display type wired up in `main`
pub type Display = Ssd1322<
    Spi<'static, SPI1, Async>,
    Output<'static>,
    Output<'static>,
    Output<'static>,
    Delay,
>;

/// Readout frames between progress logs
const LOG_EVERY_FRAMES: u32 = 1000;

/// Clock backed by the embassy time driver
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

/// Render task - owns the display for the lifetime of the firmware
#[embassy_executor::task]
pub async fn render_task(mut display: Display, config: DisplayConfig) {
    info!("Render task started");

    let clock = EmbassyClock;
    let mut render_loop = RenderLoop::new(&config, ASSETS, &clock);

    let retry = InitRetry::default();
    let init = init_with_retry(&mut display, &mut Delay, retry, |attempt, e| {
        error!(
            "Display init failed: {:?} (attempt {}/{})",
            e, attempt, retry.attempts
        );
    })
    .await;
    match init {
        Ok(attempt) => info!("Display initialized (attempt {})", attempt),
        Err(e) => {
            error!("Display unavailable ({:?}), render task exiting", e);
            return;
        }
    }
    render_loop.start(&clock);
    let idle = Duration::from_millis(config.render.idle_ms as u64);

    info!("Rendering in {:?} mode", render_loop.mode());

    loop {
        match render_loop.render(&mut display, &clock).await {
            Ok(Frame::Readout(speed)) => {
                if render_loop.frames() % LOG_EVERY_FRAMES == 0 {
                    debug!(
                        "{} frames, speed {}, last frame {} ms",
                        render_loop.frames(),
                        speed,
                        render_loop.clock().elapsed_ms()
                    );
                }
            }
            Ok(Frame::Paged(strips)) => {
                trace!("Logo drawn in {} strips", strips);
            }
            Err(e) => {
                warn!("Frame dropped: {:?}", e);
            }
        }

        match render_loop.mode() {
            RenderMode::Continuous => yield_now().await,
            RenderMode::Paged => Timer::after(idle).await,
        }
    }
}
