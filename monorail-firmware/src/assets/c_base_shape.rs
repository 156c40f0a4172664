//! Generated from 'c-base-shape.bmp' using `xbm-gen`

use monorail_core::bitmap::Xbm;

#[rustfmt::skip]
pub const C_BASE_SHAPE: Xbm = Xbm::new(48, 48, &[
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x3F, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0xC0, 0xFF,
    0xFF, 0x03, 0x00, 0x00, 0xE0, 0x07, 0xE0, 0x07, 0x00, 0x00, 0xF0, 0x01, 0x80, 0x0F, 0x00, 0x00, 0x78, 0x00, 0x00,
    0x1E, 0x00, 0x00, 0x3C, 0x00, 0x00, 0x3C, 0x00, 0xF0, 0x1F, 0x00, 0x00, 0x78, 0x00, 0xF8, 0x0F, 0x00, 0x00, 0x70,
    0x00, 0x1C, 0x0F, 0x00, 0x00, 0xF0, 0x00, 0x1C, 0x07, 0x00, 0x00, 0xE0, 0x00, 0x98, 0x07, 0x00, 0x00, 0xE0, 0x01,
    0xB8, 0x03, 0xE0, 0x07, 0xC0, 0x01, 0xF0, 0x03, 0xF0, 0x0F, 0xC0, 0x01, 0xE0, 0x03, 0xF8, 0x1F, 0xC0, 0x01, 0xC0,
    0x03, 0xF8, 0x1F, 0xC0, 0x01, 0x80, 0x07, 0xF8, 0x1F, 0xC0, 0x01, 0x80, 0x1F, 0xF8, 0x1F, 0xC0, 0x01, 0x80, 0x7B,
    0xF8, 0x1F, 0xC0, 0x03, 0x80, 0xF3, 0xF9, 0x1F, 0xC0, 0x07, 0x80, 0xC3, 0xFF, 0x0F, 0xC0, 0x0F, 0x80, 0x03, 0xFF,
    0x07, 0xC0, 0x1D, 0x80, 0x07, 0xF8, 0x01, 0xE0, 0x19, 0x00, 0x07, 0xE0, 0x1F, 0xE0, 0x38, 0x00, 0x0F, 0x00, 0xFF,
    0xF1, 0x38, 0x00, 0x0E, 0x00, 0xF0, 0xFF, 0x1F, 0x00, 0x1E, 0x00, 0x00, 0xFF, 0x0F, 0x00, 0x3C, 0x00, 0x00, 0x3C,
    0x00, 0x00, 0x78, 0x00, 0x00, 0x1E, 0x00, 0x00, 0xF0, 0x01, 0x80, 0x0F, 0x00, 0x00, 0xE0, 0x07, 0xE0, 0x07, 0x00,
    0x00, 0xC0, 0xFF, 0xFF, 0x03, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x3F, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00,
]);
