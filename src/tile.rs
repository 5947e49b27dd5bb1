//! Mapping of canvas pixels onto the AS1130's memory layout.
//!
//! Note 1: A tile is the 24x5 block of LEDs driven by one on/off frame. The LEDs are wired
//! column-major, so LED `x*5 + y` is at tile column `x`, row `y`. LEDs are packed into the frame 10
//! to a register pair: the first byte of the pair holds LEDs 0-7 of the group, and the low two bits
//! of the second byte hold LEDs 8-9. In the blink & PWM set, each LED has its own PWM byte.

use itertools::iproduct;

use crate::canvas::Canvas;
use crate::command::consts::{ON_OFF_BYTES, PWM_BYTES};

pub const TILE_COLS: usize = 24;
pub const TILE_ROWS: usize = 5;
pub const TILE_PIXELS: usize = TILE_COLS * TILE_ROWS;

/// LEDs sharing one register pair.
const LEDS_PER_PAIR: usize = 10;

/// Linear LED number of tile pixel (`x`, `y`). (Note 1)
pub fn led_index(x: usize, y: usize) -> usize {
    x * TILE_ROWS + y
}

/// Bit of the LED within its register pair, 0-9. Bits 8 and 9 live in the second byte.
pub fn register_bit(led: usize) -> usize {
    led % LEDS_PER_PAIR
}

/// On/off frame byte holding the LED's bit.
pub fn register_index(led: usize) -> usize {
    led / LEDS_PER_PAIR * 2 + register_bit(led) / 8
}

/// Offset of the LED's byte in the brightness table.
pub fn pwm_slot(led: usize) -> usize {
    led
}

/// A tile translated into the chip's layout: what to write to an on/off frame, and what to write
/// to the PWM slots of a blink & PWM set.
#[derive(Clone, Copy)]
pub struct EncodedTile {
    pub on_off: [u8; ON_OFF_BYTES],
    pub brightness: [u8; PWM_BYTES],
}

/// Encode a row-major 24x5 tile of pixels. Every nonzero pixel turns its LED on, and its value is
/// copied into the brightness table. Slots past the last LED are left at 0.
pub fn encode_tile(pixels: &[u8; TILE_PIXELS]) -> EncodedTile {
    let mut encoded = EncodedTile {
        on_off: [0; ON_OFF_BYTES],
        brightness: [0; PWM_BYTES],
    };
    for (y, x) in iproduct!(0..TILE_ROWS, 0..TILE_COLS) {
        let value = pixels[x + y * TILE_COLS];
        let led = led_index(x, y);
        if value != 0 {
            encoded.on_off[register_index(led)] |= 1 << (register_bit(led) & 7);
        }
        encoded.brightness[pwm_slot(led)] = value;
    }
    encoded
}

/// A 24x5 slice of a canvas, copied out so it can be encoded.
#[derive(Clone, Copy)]
pub struct Tile {
    /// Position of the tile, counting from the left of the canvas.
    pub index: usize,
    /// Canvas column of the tile's leftmost pixel column.
    pub first_column: usize,
    /// Row-major pixels of the tile.
    pub pixels: [u8; TILE_PIXELS],
}

impl Tile {
    pub fn encode(&self) -> EncodedTile {
        encode_tile(&self.pixels)
    }
}

/// Iterator over the whole tiles of a canvas, left to right. See `split`.
pub struct Tiles<'c> {
    canvas: &'c Canvas,
    next: usize,
}

/// Number of whole tiles across `canvas`.
pub fn tile_count(canvas: &Canvas) -> usize {
    canvas.width() / TILE_COLS
}

/// Split `canvas` into tiles. Columns past the last whole tile are not part of any tile and never
/// reach the display. Canvas rows past the fifth are likewise dropped; rows missing from a canvas
/// shorter than a tile read as off.
pub fn split(canvas: &Canvas) -> Tiles<'_> {
    Tiles { canvas, next: 0 }
}

impl<'c> Iterator for Tiles<'c> {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.next >= tile_count(self.canvas) {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let first_column = index * TILE_COLS;
        let rows = self.canvas.height().min(TILE_ROWS);
        let mut pixels = [0u8; TILE_PIXELS];
        for (y, x) in iproduct!(0..rows, 0..TILE_COLS) {
            pixels[x + y * TILE_COLS] = self.canvas.pixel(first_column + x, y);
        }
        Some(Tile {
            index,
            first_column,
            pixels,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = tile_count(self.canvas).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl<'c> ExactSizeIterator for Tiles<'c> {}
