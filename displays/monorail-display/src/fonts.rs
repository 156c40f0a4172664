//! Font roles mapped onto embedded-graphics mono fonts

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_6X12};
use embedded_graphics::mono_font::MonoFont;
use monorail_core::traits::FontFace;

/// Concrete font for a role
pub fn mono_font(face: FontFace) -> &'static MonoFont<'static> {
    match face {
        FontFace::Label => &FONT_6X10,
        FontFace::Value => &FONT_10X20,
        FontFace::Unit => &FONT_6X12,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_font_is_largest() {
        let label = mono_font(FontFace::Label).character_size;
        let value = mono_font(FontFace::Value).character_size;
        let unit = mono_font(FontFace::Unit).character_size;
        assert!(value.height > label.height);
        assert!(value.height > unit.height);
        assert_eq!(label.width, 6);
    }
}
