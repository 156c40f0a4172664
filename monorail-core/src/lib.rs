//! Board-agnostic core logic for the Monorail display firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Display surface and clock traits
//! - Display bring-up with retries
//! - Render loop and frame composition
//! - Animation clock and speed readout math
//! - Screen layout
//! - XBM bitmap assets
//! - Configuration types and the no_std config parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod animation;
pub mod bitmap;
pub mod bringup;
pub mod config;
pub mod layout;
pub mod render;
pub mod traits;

pub use bitmap::Xbm;
pub use bringup::{init_with_retry, InitRetry};
pub use layout::{Layout, Position};
pub use render::{Assets, Frame, RenderLoop};
