//! Display driver for the Monorail firmware
//!
//! This crate provides:
//! - `Ssd1322`, an async SSD1322 driver implementing `DisplaySurface`
//! - `FrameBuffer`, a windowed 1 bpp buffer usable as an embedded-graphics
//!   `DrawTarget`
//! - The mapping from font roles to embedded-graphics mono fonts
//!
//! # Architecture
//!
//! The render loop in `monorail-core` only sees the `DisplaySurface` trait.
//! Drawing goes into the frame buffer; `present` (full-frame mode) or
//! `next_page` (paged mode) expands the buffer to the controller's 4 bpp
//! format and streams it over SPI.
//!
//! ## Render modes
//!
//! - **Full frame**: `clear_buffer` opens a window over the whole panel and
//!   `present` sends it in one transfer.
//! - **Paged**: `begin_paged_frame` opens a window over the first strip.
//!   The caller redraws the same content once per strip while `next_page`
//!   returns `true`.

#![cfg_attr(not(test), no_std)]

pub mod fonts;
pub mod framebuffer;
pub mod ssd1322;

// Re-export key types
pub use framebuffer::{FrameBuffer, MAX_HEIGHT, MAX_WIDTH};
pub use ssd1322::Ssd1322;
