//! Display surface trait
//!
//! The render loop draws through this trait and never touches the bus.
//! Drawing calls only touch the off-screen buffer; `present` and
//! `next_page` are the points where pixels reach the panel.

use crate::bitmap::Xbm;
use crate::layout::Position;

/// Errors that can occur while talking to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed
    Communication,
    /// Control pin (DC, CS, reset) could not be driven
    Pin,
    /// Transfer attempted before `init` succeeded
    NotInitialized,
}

/// Font role for subsequent text draws
///
/// Surfaces map each role onto a concrete font. Text is anchored at the
/// top-left corner of the glyph cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontFace {
    /// Small caption font
    #[default]
    Label,
    /// Large digits for the readout
    Value,
    /// Small font for the unit caption
    Unit,
}

/// Off-screen drawing surface backed by a physical display
#[allow(async_fn_in_trait)]
pub trait DisplaySurface {
    /// One-time bus and controller bring-up
    async fn init(&mut self) -> Result<(), DisplayError>;

    /// Select the font for subsequent `draw_text` calls
    fn set_font(&mut self, font: FontFace);

    /// Reset the off-screen buffer to background
    fn clear_buffer(&mut self);

    /// Blit a bitmap with its top-left corner at `origin`
    fn draw_bitmap(&mut self, origin: Position, bitmap: &Xbm);

    /// Render text with its top-left corner at `origin`
    fn draw_text(&mut self, origin: Position, text: &str);

    /// Send the whole off-screen buffer to the panel
    async fn present(&mut self) -> Result<(), DisplayError>;

    /// Start a paged frame at the first strip
    ///
    /// The buffer is cleared and covers only the current strip.
    fn begin_paged_frame(&mut self);

    /// Send the current strip and move to the next one
    ///
    /// Returns `Ok(true)` while more strips remain to be drawn.
    async fn next_page(&mut self) -> Result<bool, DisplayError>;
}
