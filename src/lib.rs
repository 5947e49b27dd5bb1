//! Driver library for the ams AS1130 LED matrix controller, driving panels built from 24x5 LED
//! tiles.
//!
//! Images are composed on a `Canvas` of any width, optionally with text drawn from a monospace
//! `Font`, and sent to the chip with `Display::render_all`, which splits the canvas into tiles and
//! writes each into its own on/off frame.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
extern crate embedded_hal as hal;

pub mod canvas;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod interface;
pub mod text;
pub mod tile;

// Re-exports for primary API.
pub use canvas::{Canvas, Source};
pub use command::consts;
pub use config::Config;
pub use display::frame::{Frame, Shading};
pub use display::Display;
pub use error::{Error, InvalidDimensions};
pub use font::{Font, Glyph, FONT_3X5};
pub use interface::i2c::I2cInterface;
pub use interface::DisplayInterface;
pub use text::draw_string;
pub use tile::{encode_tile, split, EncodedTile, Tile};
