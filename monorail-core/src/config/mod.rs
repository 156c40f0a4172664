//! Configuration types and parsing
//!
//! The firmware embeds `monorail.toml` and parses it at boot with the
//! no_std parser in [`parse`].

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
