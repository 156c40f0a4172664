//! XBM bitmap assets
//!
//! Monochrome images are stored in XBM layout: 1 bit per pixel, the lowest
//! bit of each byte is the leftmost pixel, and every row starts on a fresh
//! byte. Assets are generated by `xbm-gen` and compiled into flash.

/// Immutable 1 bpp bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xbm {
    width: u32,
    height: u32,
    data: &'static [u8],
}

impl Xbm {
    /// Wrap packed XBM data
    ///
    /// # Panics
    ///
    /// Panics if `data` does not hold exactly `stride * height` bytes. Assets
    /// are declared as `const` items, so a mismatch fails the build.
    pub const fn new(width: u32, height: u32, data: &'static [u8]) -> Self {
        let stride = (width as usize).div_ceil(8);
        assert!(data.len() == stride * height as usize, "XBM data length mismatch");
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row
    pub const fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Whether the pixel at (x, y) is set
    ///
    /// Out-of-range coordinates read as unset.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y as usize * self.stride() + (x / 8) as usize];
        byte & (1 << (x % 8)) != 0
    }

    /// Iterate over the coordinates of every set pixel, row by row
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).filter_map(move |x| self.pixel(x, y).then_some((x, y)))
        })
    }
}
