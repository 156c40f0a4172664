//! XBM packing and Rust source emission

use std::fmt::Write;

/// Packed 1 bpp image, rows padded to whole bytes, leftmost pixel in bit 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XbmImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl XbmImage {
    /// Bytes per row
    pub fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Number of lit pixels
    pub fn lit(&self) -> u32 {
        self.data.iter().map(|b| b.count_ones()).sum()
    }
}

/// Pack an image given a per-pixel predicate
pub fn pack_xbm(width: u32, height: u32, is_on: impl Fn(u32, u32) -> bool) -> XbmImage {
    let stride = (width as usize).div_ceil(8);
    let mut data = vec![0u8; stride * height as usize];

    for y in 0..height {
        for x in 0..width {
            if is_on(x, y) {
                data[y as usize * stride + (x / 8) as usize] |= 1 << (x % 8);
            }
        }
    }

    XbmImage {
        width,
        height,
        data,
    }
}

/// Turn a file stem such as `c-base shape` into `C_BASE_SHAPE`
pub fn const_name(stem: &str) -> String {
    let mut name: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert_str(0, "IMG_");
    }
    name
}

/// Render a Rust module declaring the image as a `monorail_core::bitmap::Xbm`
pub fn render_module(image: &XbmImage, name: &str, source: &str, bytes_per_line: usize) -> String {
    let bytes_per_line = bytes_per_line.max(1);
    let mut out = String::new();

    let _ = writeln!(out, "//! Generated from '{source}' using `xbm-gen`");
    let _ = writeln!(out);
    let _ = writeln!(out, "use monorail_core::bitmap::Xbm;");
    let _ = writeln!(out);
    let _ = writeln!(out, "#[rustfmt::skip]");
    let _ = writeln!(
        out,
        "pub const {name}: Xbm = Xbm::new({}, {}, &[",
        image.width, image.height
    );
    for chunk in image.data.chunks(bytes_per_line) {
        let line: Vec<String> = chunk.iter().map(|b| format!("0x{b:02X}")).collect();
        let _ = writeln!(out, "    {},", line.join(", "));
    }
    let _ = writeln!(out, "]);");
    out
}
