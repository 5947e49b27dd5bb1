//! The canvas: an arbitrarily wide brightness buffer which is composed by the client before being
//! split into tiles and sent to the chip.

use alloc::vec;
use alloc::vec::Vec;

use itertools::iproduct;

use crate::error::InvalidDimensions;

/// Pixel value written for set bits of a monochrome source.
pub const FULL: u8 = 0xFF;

/// Image data which can be drawn onto a canvas.
///
/// The two variants are deliberately distinct: monochrome sources, such as font glyphs, can only
/// ever produce fully-off or fully-on pixels, while brightness sources carry literal PWM levels.
#[derive(Clone, Copy, Debug)]
pub enum Source<'a> {
    /// Bit-packed monochrome image, MSB first. Each row starts on a byte boundary, so the row
    /// stride is `ceil(width / 8)` bytes. Set bits are drawn as `FULL`, clear bits as 0.
    Mono {
        bits: &'a [u8],
        width: usize,
        height: usize,
    },
    /// One brightness byte per pixel, row-major, drawn as-is.
    Levels {
        levels: &'a [u8],
        width: usize,
        height: usize,
    },
}

impl<'a> Source<'a> {
    pub fn width(&self) -> usize {
        match *self {
            Source::Mono { width, .. } | Source::Levels { width, .. } => width,
        }
    }

    pub fn height(&self) -> usize {
        match *self {
            Source::Mono { height, .. } | Source::Levels { height, .. } => height,
        }
    }

    /// The pixel value at (`x`, `y`) of the source.
    fn value(&self, x: usize, y: usize) -> u8 {
        match *self {
            Source::Mono { bits, width, .. } => {
                let stride = (width + 7) / 8;
                if bits[y * stride + x / 8] & (0x80 >> (x & 7)) != 0 {
                    FULL
                } else {
                    0
                }
            }
            Source::Levels { levels, width, .. } => levels[y * width + x],
        }
    }
}

/// A width x height brightness buffer. Pixel value 0 is off, anything else is a brightness level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Allocate a canvas with every pixel off.
    pub fn new(width: usize, height: usize) -> Result<Self, InvalidDimensions> {
        if width == 0 || height == 0 {
            return Err(InvalidDimensions);
        }
        let len = width.checked_mul(height).ok_or(InvalidDimensions)?;
        Ok(Canvas {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw pixel buffer, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Offset of (`x`, `y`) into the pixel buffer. Coordinates outside the canvas are a bug in the
    /// caller and panic.
    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} canvas",
            x,
            y,
            self.width,
            self.height
        );
        x + y * self.width
    }

    /// Read the pixel at (`x`, `y`).
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[self.offset(x, y)]
    }

    /// Write brightness `value` at (`x`, `y`). This is the way to draw dimmed pixels; see
    /// `Source::Levels` for whole images.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: u8) {
        let offset = self.offset(x, y);
        self.pixels[offset] = value;
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        for p in self.pixels.iter_mut() {
            *p = 0;
        }
    }

    /// Draw `source` with its upper left corner at (`dst_x`, `dst_y`). Only pixels inside the
    /// destination rectangle are modified, and every one of them is overwritten. The destination
    /// rectangle must lie entirely within the canvas.
    pub fn draw(&mut self, dst_x: usize, dst_y: usize, source: Source) {
        let (width, height) = (source.width(), source.height());
        if width == 0 || height == 0 {
            return;
        }
        // Check the far corner up front so nothing is drawn when the rectangle does not fit.
        self.offset(dst_x + width - 1, dst_y + height - 1);
        for (y, x) in iproduct!(0..height, 0..width) {
            let offset = (dst_x + x) + (dst_y + y) * self.width;
            self.pixels[offset] = source.value(x, y);
        }
    }

    /// Copy a bit-packed monochrome image onto the canvas at (`dst_x`, `dst_y`). See
    /// `Source::Mono` for the bit layout.
    pub fn blit(&mut self, dst_x: usize, dst_y: usize, bits: &[u8], width: usize, height: usize) {
        self.draw(
            dst_x,
            dst_y,
            Source::Mono {
                bits,
                width,
                height,
            },
        )
    }
}
