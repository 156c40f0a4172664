//! Frame composition
//!
//! `RenderLoop` owns the animation clock and issues a fixed sequence of
//! draw calls per frame:
//!
//! ```text
//! clear → shape → label → value → unit → present
//! ```
//!
//! Only the value text changes between frames. The paged variant draws the
//! logo once per strip until the surface reports no strips remain.

use crate::animation::{format_speed, AnimationClock};
use crate::bitmap::Xbm;
use crate::config::{DisplayConfig, RenderMode, TextConfig};
use crate::layout::Layout;
use crate::traits::{Clock, DisplayError, DisplaySurface, FontFace};

/// Static bitmaps referenced by the render loop
#[derive(Debug, Clone, Copy)]
pub struct Assets {
    /// Drawn to the left of the readout
    pub shape: Xbm,
    /// Full-screen logo for the paged variant
    pub logo: Xbm,
}

/// Result of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// A readout frame with the value it showed
    Readout(f64),
    /// A paged logo draw over this many strips
    Paged(u16),
}

/// Render loop state
pub struct RenderLoop {
    clock: AnimationClock,
    mode: RenderMode,
    layout: Layout,
    assets: Assets,
    text: TextConfig,
    frames: u32,
}

impl RenderLoop {
    /// Create a render loop with its clock origin at the current time
    pub fn new<C: Clock>(config: &DisplayConfig, assets: Assets, clock: &C) -> Self {
        Self {
            clock: AnimationClock::new(
                clock.now_ms(),
                config.animation.period_ticks,
                config.animation.tick_ms,
            ),
            mode: config.render.mode,
            layout: Layout::for_shape(assets.shape.width()),
            assets,
            text: config.text.clone(),
            frames: 0,
        }
    }

    /// Loop variant chosen at startup
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Animation clock state
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Frames completed since startup
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Restart the frame clock at the current time
    ///
    /// Call once the display is up so the first frame's elapsed time does
    /// not include display bring-up.
    pub fn start<C: Clock>(&mut self, clock: &C) {
        self.clock = AnimationClock::new(
            clock.now_ms(),
            self.clock.period_ticks(),
            self.clock.tick_ms(),
        );
        self.frames = 0;
    }

    /// Run one iteration of the configured variant
    pub async fn render<S, C>(&mut self, surface: &mut S, clock: &C) -> Result<Frame, DisplayError>
    where
        S: DisplaySurface,
        C: Clock,
    {
        match self.mode {
            RenderMode::Continuous => self.render_frame(surface, clock).await.map(Frame::Readout),
            RenderMode::Paged => self.render_paged(surface).await.map(Frame::Paged),
        }
    }

    /// Draw and present one readout frame, returning the displayed value
    pub async fn render_frame<S, C>(&mut self, surface: &mut S, clock: &C) -> Result<f64, DisplayError>
    where
        S: DisplaySurface,
        C: Clock,
    {
        let speed = self.clock.advance(clock.now_ms());
        let text = format_speed(speed);

        surface.set_font(FontFace::Label);
        surface.clear_buffer();

        surface.draw_bitmap(self.layout.shape, &self.assets.shape);

        surface.set_font(FontFace::Label);
        surface.draw_text(self.layout.label, &self.text.label);

        surface.set_font(FontFace::Value);
        surface.draw_text(self.layout.value, &text);

        surface.set_font(FontFace::Unit);
        surface.draw_text(self.layout.unit, &self.text.unit);

        surface.present().await?;
        self.frames = self.frames.wrapping_add(1);

        Ok(speed)
    }

    /// Draw the logo strip by strip, returning the number of strips sent
    pub async fn render_paged<S>(&mut self, surface: &mut S) -> Result<u16, DisplayError>
    where
        S: DisplaySurface,
    {
        surface.set_font(FontFace::Label);
        surface.begin_paged_frame();

        let mut pages: u16 = 0;
        loop {
            surface.draw_bitmap(self.layout.logo, &self.assets.logo);
            pages += 1;
            if !surface.next_page().await? {
                break;
            }
        }

        self.frames = self.frames.wrapping_add(1);
        Ok(pages)
    }
}
