//! Windowed 1 bpp frame buffer
//!
//! The buffer covers a horizontal window of the panel: the whole height for
//! full-frame rendering, or one strip for paged rendering. Pixels outside the
//! window are dropped, so a paged frame is produced by drawing the same
//! content once per strip.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use monorail_core::config::{MAX_PANEL_HEIGHT, MAX_PANEL_WIDTH};

/// Widest panel the buffer can hold
pub const MAX_WIDTH: usize = MAX_PANEL_WIDTH as usize;

/// Tallest panel the buffer can hold
pub const MAX_HEIGHT: usize = MAX_PANEL_HEIGHT as usize;

/// Bytes per 1 bpp row
const ROW_BYTES: usize = MAX_WIDTH / 8;

/// Bytes per 4 bpp row as sent to the controller
pub const GRAY4_ROW_BYTES: usize = MAX_WIDTH / 2;

/// Gray level used for lit pixels
const GRAY_ON: u8 = 0x0F;

/// Monochrome frame buffer with a row window
pub struct FrameBuffer {
    pixels: [u8; ROW_BYTES * MAX_HEIGHT],
    width: u16,
    height: u16,
    window_top: u16,
    window_rows: u16,
}

impl FrameBuffer {
    /// Create a cleared buffer spanning the full panel
    ///
    /// Dimensions are clamped to the buffer capacity.
    pub const fn new(width: u16, height: u16) -> Self {
        let width = if width as usize > MAX_WIDTH {
            MAX_WIDTH as u16
        } else {
            width
        };
        let height = if height as usize > MAX_HEIGHT {
            MAX_HEIGHT as u16
        } else {
            height
        };
        Self {
            pixels: [0; ROW_BYTES * MAX_HEIGHT],
            width,
            height,
            window_top: 0,
            window_rows: height,
        }
    }

    /// Panel width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Panel height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Current window as (top row, row count)
    pub const fn window(&self) -> (u16, u16) {
        (self.window_top, self.window_rows)
    }

    /// Whether the window covers the whole panel
    pub const fn is_full(&self) -> bool {
        self.window_top == 0 && self.window_rows == self.height
    }

    /// Whether the window ends at the bottom of the panel
    pub const fn is_last_window(&self) -> bool {
        self.window_top + self.window_rows >= self.height
    }

    /// Move the window and clear it
    pub fn set_window(&mut self, top: u16, rows: u16) {
        let top = top.min(self.height);
        self.window_top = top;
        self.window_rows = rows.min(self.height - top);
        self.clear();
    }

    /// Clear every row in the window
    pub fn clear(&mut self) {
        let used = self.window_rows as usize * ROW_BYTES;
        self.pixels[..used].fill(0);
    }

    /// Set a pixel in panel coordinates, ignoring pixels outside the window
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let mask = 1 << (x as usize % 8);
        if on {
            self.pixels[index] |= mask;
        } else {
            self.pixels[index] &= !mask;
        }
    }

    /// Read a pixel in panel coordinates; pixels outside the window read as off
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.index(x, y)
            .map(|i| self.pixels[i] & (1 << (x as usize % 8)) != 0)
            .unwrap_or(false)
    }

    /// Expand panel row `y` to 4 bpp, two pixels per byte, left pixel high
    ///
    /// Returns the number of bytes written, or 0 if `y` is outside the window.
    pub fn gray4_row(&self, y: u16, out: &mut [u8; GRAY4_ROW_BYTES]) -> usize {
        if y < self.window_top || y >= self.window_top + self.window_rows {
            return 0;
        }
        let y = y as i32;
        let len = self.width as usize / 2;
        for (i, byte) in out[..len].iter_mut().enumerate() {
            let x = (i * 2) as i32;
            let left = if self.pixel(x, y) { GRAY_ON } else { 0 };
            let right = if self.pixel(x + 1, y) { GRAY_ON } else { 0 };
            *byte = (left << 4) | right;
        }
        len
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 {
            return None;
        }
        let row = y - self.window_top as i32;
        if row < 0 || row >= self.window_rows as i32 {
            return None;
        }
        Some(row as usize * ROW_BYTES + x as usize / 8)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_set_and_read_pixel() {
        let mut fb = FrameBuffer::new(256, 64);
        fb.set_pixel(10, 5, true);
        assert!(fb.pixel(10, 5));
        assert!(!fb.pixel(11, 5));

        fb.set_pixel(10, 5, false);
        assert!(!fb.pixel(10, 5));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new(256, 64);
        fb.set_pixel(-1, 0, true);
        fb.set_pixel(256, 0, true);
        fb.set_pixel(0, 64, true);
        assert!(!fb.pixel(-1, 0));
        assert!(!fb.pixel(256, 0));
        assert!(!fb.pixel(0, 64));
    }

    #[test]
    fn test_dimensions_are_clamped() {
        let fb = FrameBuffer::new(480, 128);
        assert_eq!(fb.width(), 256);
        assert_eq!(fb.height(), 64);
        assert!(fb.is_full());
    }

    #[test]
    fn test_window_clips_drawing() {
        let mut fb = FrameBuffer::new(256, 64);
        fb.set_window(16, 16);
        assert_eq!(fb.window(), (16, 16));
        assert!(!fb.is_full());

        fb.set_pixel(3, 15, true);
        fb.set_pixel(3, 16, true);
        fb.set_pixel(3, 31, true);
        fb.set_pixel(3, 32, true);

        assert!(!fb.pixel(3, 15));
        assert!(fb.pixel(3, 16));
        assert!(fb.pixel(3, 31));
        assert!(!fb.pixel(3, 32));
    }

    #[test]
    fn test_window_is_clamped_to_panel() {
        let mut fb = FrameBuffer::new(256, 64);
        fb.set_window(48, 32);
        assert_eq!(fb.window(), (48, 16));
        assert!(fb.is_last_window());
    }

    #[test]
    fn test_set_window_clears() {
        let mut fb = FrameBuffer::new(256, 64);
        fb.set_window(0, 8);
        fb.set_pixel(0, 0, true);
        fb.set_window(8, 8);
        fb.set_window(0, 8);
        assert!(!fb.pixel(0, 0));
    }

    #[test]
    fn test_gray4_row_packing() {
        let mut fb = FrameBuffer::new(256, 64);
        fb.set_pixel(0, 2, true);
        fb.set_pixel(3, 2, true);

        let mut out = [0xAA; GRAY4_ROW_BYTES];
        assert_eq!(fb.gray4_row(2, &mut out), 128);
        assert_eq!(out[0], 0xF0);
        assert_eq!(out[1], 0x0F);
        assert!(out[2..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_gray4_row_outside_window() {
        let mut fb = FrameBuffer::new(256, 64);
        fb.set_window(0, 8);
        let mut out = [0; GRAY4_ROW_BYTES];
        assert_eq!(fb.gray4_row(8, &mut out), 0);
    }

    #[test]
    fn test_draw_target() {
        let mut fb = FrameBuffer::new(256, 64);
        Rectangle::new(Point::new(4, 4), Size::new(2, 2))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut fb)
            .unwrap();
        assert!(fb.pixel(4, 4));
        assert!(fb.pixel(5, 5));
        assert!(!fb.pixel(6, 6));
    }
}
