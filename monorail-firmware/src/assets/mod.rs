//! Bitmaps compiled into the firmware
//!
//! Regenerate with `xbm-gen <image> <NAME> -o <file>`.

mod c_base_logo;
mod c_base_shape;

use monorail_core::Assets;

use c_base_logo::C_BASE_LOGO;
use c_base_shape::C_BASE_SHAPE;

/// Bitmaps used by the render loop
pub const ASSETS: Assets = Assets {
    shape: C_BASE_SHAPE,
    logo: C_BASE_LOGO,
};
