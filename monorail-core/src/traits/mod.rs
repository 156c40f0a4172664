//! Hardware abstraction traits
//!
//! These traits define the interface between the render loop and the
//! hardware-specific display driver and time source.

pub mod clock;
pub mod display;

pub use clock::Clock;
pub use display::{DisplayError, DisplaySurface, FontFace};
