//! Fixed screen layout
//!
//! Every element sits at a fixed pixel position. The text column starts a
//! fixed gap to the right of the shape asset, so it moves with the asset
//! width.

/// Pixel position of the top-left corner of a drawn element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Margin between the screen edge and the shape
pub const SHAPE_MARGIN: i32 = 2;

/// Horizontal gap between the shape and the text column
pub const TEXT_GAP: i32 = 16;

/// Top of the "Monorail speed" label
pub const LABEL_Y: i32 = 8;

/// Top of the large speed readout
pub const VALUE_Y: i32 = 20;

/// Unit label position, near the bottom-right of a 256x64 panel
pub const UNIT_POSITION: Position = Position::new(3 * 64 - 16, 64 - 30);

/// Resolved positions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    pub shape: Position,
    pub label: Position,
    pub value: Position,
    pub unit: Position,
    /// Logo origin for the paged one-shot draw
    pub logo: Position,
}

impl Layout {
    /// Compute the layout for a shape asset of the given width
    pub const fn for_shape(shape_width: u32) -> Self {
        let text_x = shape_width as i32 + SHAPE_MARGIN + TEXT_GAP;
        Self {
            shape: Position::new(SHAPE_MARGIN, SHAPE_MARGIN),
            label: Position::new(text_x, LABEL_Y),
            value: Position::new(text_x, VALUE_Y),
            unit: UNIT_POSITION,
            logo: Position::new(0, 0),
        }
    }
}
