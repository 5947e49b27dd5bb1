//! Monospace bitmap fonts, with glyphs indexed from the space character.

use crate::canvas::Source;
use crate::error::InvalidDimensions;
use crate::tile::TILE_ROWS;

/// Code of the first character in a font table.
const FIRST_CODE: u32 = 0x20;

/// Table index of the glyph drawn in place of characters the font does not cover.
const FALLBACK_INDEX: usize = (b'?' as u32 - FIRST_CODE) as usize;

/// A monospace font: one fixed-size, bit-packed glyph per character, starting at `' '`.
///
/// Each glyph is `glyph_height` rows of `ceil(glyph_width / 8)` bytes, MSB first, and glyphs are
/// stored back to back in character order.
#[derive(Clone, Copy, Debug)]
pub struct Font<'a> {
    glyph_width: u8,
    glyph_height: u8,
    bitmaps: &'a [u8],
}

/// The bitmap of a single character, borrowed from its font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph<'a> {
    bits: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> Font<'a> {
    /// Wrap a glyph table. The table must hold a whole number of glyphs and extend at least as far
    /// as `'?'`, which stands in for any character past its end. Glyphs may be no taller than a
    /// tile.
    pub fn new(
        glyph_width: u8,
        glyph_height: u8,
        bitmaps: &'a [u8],
    ) -> Result<Self, InvalidDimensions> {
        if glyph_width == 0 || glyph_height == 0 || glyph_height as usize > TILE_ROWS {
            return Err(InvalidDimensions);
        }
        let font = Font {
            glyph_width,
            glyph_height,
            bitmaps,
        };
        if bitmaps.len() % font.glyph_bytes() != 0 || !font.is_valid_index(FALLBACK_INDEX) {
            return Err(InvalidDimensions);
        }
        Ok(font)
    }

    pub fn glyph_width(&self) -> usize {
        self.glyph_width as usize
    }

    pub fn glyph_height(&self) -> usize {
        self.glyph_height as usize
    }

    /// Width of one glyph cell including its column of spacing.
    pub fn advance(&self) -> usize {
        self.glyph_width() + 1
    }

    fn glyph_bytes(&self) -> usize {
        (self.glyph_width() + 7) / 8 * self.glyph_height()
    }

    /// Number of glyphs in the table.
    pub fn glyph_count(&self) -> usize {
        self.bitmaps.len() / self.glyph_bytes()
    }

    /// Whether `index` addresses a glyph in the table.
    pub fn is_valid_index(&self, index: usize) -> bool {
        index < self.glyph_count()
    }

    /// Look up the glyph for `c`. Characters outside the table, including control characters
    /// below `' '`, are drawn as `'?'`.
    pub fn glyph(&self, c: char) -> Glyph<'a> {
        let index = (c as u32)
            .checked_sub(FIRST_CODE)
            .map(|i| i as usize)
            .filter(|&i| self.is_valid_index(i))
            .unwrap_or(FALLBACK_INDEX);
        let len = self.glyph_bytes();
        Glyph {
            bits: &self.bitmaps[index * len..(index + 1) * len],
            width: self.glyph_width(),
            height: self.glyph_height(),
        }
    }
}

impl<'a> Glyph<'a> {
    pub fn bits(&self) -> &'a [u8] {
        self.bits
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The glyph as a monochrome image for `Canvas::draw`.
    pub fn source(&self) -> Source<'a> {
        Source::Mono {
            bits: self.bits,
            width: self.width,
            height: self.height,
        }
    }
}

/// A 3x5 font covering printable ASCII, `' '` through `'~'`. Exactly one tile high, so a tile
/// fits six characters.
pub const FONT_3X5: Font<'static> = Font {
    glyph_width: 3,
    glyph_height: 5,
    bitmaps: &FONT_3X5_BITMAPS,
};

#[cfg_attr(rustfmt, rustfmt_skip)]
const FONT_3X5_BITMAPS: [u8; 95 * 5] = [
    0b000_00000, 0b000_00000, 0b000_00000, 0b000_00000, 0b000_00000, // ' '
    0b010_00000, 0b010_00000, 0b010_00000, 0b000_00000, 0b010_00000, // '!'
    0b101_00000, 0b101_00000, 0b000_00000, 0b000_00000, 0b000_00000, // '"'
    0b101_00000, 0b111_00000, 0b101_00000, 0b111_00000, 0b101_00000, // '#'
    0b011_00000, 0b110_00000, 0b010_00000, 0b011_00000, 0b110_00000, // '$'
    0b100_00000, 0b001_00000, 0b010_00000, 0b100_00000, 0b001_00000, // '%'
    0b010_00000, 0b101_00000, 0b010_00000, 0b101_00000, 0b011_00000, // '&'
    0b010_00000, 0b010_00000, 0b000_00000, 0b000_00000, 0b000_00000, // "'"
    0b001_00000, 0b010_00000, 0b010_00000, 0b010_00000, 0b001_00000, // '('
    0b100_00000, 0b010_00000, 0b010_00000, 0b010_00000, 0b100_00000, // ')'
    0b000_00000, 0b101_00000, 0b010_00000, 0b101_00000, 0b000_00000, // '*'
    0b000_00000, 0b010_00000, 0b111_00000, 0b010_00000, 0b000_00000, // '+'
    0b000_00000, 0b000_00000, 0b000_00000, 0b010_00000, 0b100_00000, // ','
    0b000_00000, 0b000_00000, 0b111_00000, 0b000_00000, 0b000_00000, // '-'
    0b000_00000, 0b000_00000, 0b000_00000, 0b000_00000, 0b010_00000, // '.'
    0b001_00000, 0b001_00000, 0b010_00000, 0b100_00000, 0b100_00000, // '/'
    0b111_00000, 0b101_00000, 0b101_00000, 0b101_00000, 0b111_00000, // '0'
    0b010_00000, 0b110_00000, 0b010_00000, 0b010_00000, 0b111_00000, // '1'
    0b110_00000, 0b001_00000, 0b010_00000, 0b100_00000, 0b111_00000, // '2'
    0b110_00000, 0b001_00000, 0b010_00000, 0b001_00000, 0b110_00000, // '3'
    0b101_00000, 0b101_00000, 0b111_00000, 0b001_00000, 0b001_00000, // '4'
    0b111_00000, 0b100_00000, 0b110_00000, 0b001_00000, 0b110_00000, // '5'
    0b011_00000, 0b100_00000, 0b111_00000, 0b101_00000, 0b111_00000, // '6'
    0b111_00000, 0b001_00000, 0b010_00000, 0b010_00000, 0b010_00000, // '7'
    0b111_00000, 0b101_00000, 0b111_00000, 0b101_00000, 0b111_00000, // '8'
    0b111_00000, 0b101_00000, 0b111_00000, 0b001_00000, 0b110_00000, // '9'
    0b000_00000, 0b010_00000, 0b000_00000, 0b010_00000, 0b000_00000, // ':'
    0b000_00000, 0b010_00000, 0b000_00000, 0b010_00000, 0b100_00000, // ';'
    0b001_00000, 0b010_00000, 0b100_00000, 0b010_00000, 0b001_00000, // '<'
    0b000_00000, 0b111_00000, 0b000_00000, 0b111_00000, 0b000_00000, // '='
    0b100_00000, 0b010_00000, 0b001_00000, 0b010_00000, 0b100_00000, // '>'
    0b110_00000, 0b001_00000, 0b010_00000, 0b000_00000, 0b010_00000, // '?'
    0b010_00000, 0b101_00000, 0b111_00000, 0b100_00000, 0b011_00000, // '@'
    0b010_00000, 0b101_00000, 0b111_00000, 0b101_00000, 0b101_00000, // 'A'
    0b110_00000, 0b101_00000, 0b110_00000, 0b101_00000, 0b110_00000, // 'B'
    0b011_00000, 0b100_00000, 0b100_00000, 0b100_00000, 0b011_00000, // 'C'
    0b110_00000, 0b101_00000, 0b101_00000, 0b101_00000, 0b110_00000, // 'D'
    0b111_00000, 0b100_00000, 0b111_00000, 0b100_00000, 0b111_00000, // 'E'
    0b111_00000, 0b100_00000, 0b111_00000, 0b100_00000, 0b100_00000, // 'F'
    0b011_00000, 0b100_00000, 0b101_00000, 0b101_00000, 0b011_00000, // 'G'
    0b101_00000, 0b101_00000, 0b111_00000, 0b101_00000, 0b101_00000, // 'H'
    0b111_00000, 0b010_00000, 0b010_00000, 0b010_00000, 0b111_00000, // 'I'
    0b001_00000, 0b001_00000, 0b001_00000, 0b101_00000, 0b010_00000, // 'J'
    0b101_00000, 0b101_00000, 0b110_00000, 0b101_00000, 0b101_00000, // 'K'
    0b100_00000, 0b100_00000, 0b100_00000, 0b100_00000, 0b111_00000, // 'L'
    0b101_00000, 0b111_00000, 0b111_00000, 0b101_00000, 0b101_00000, // 'M'
    0b101_00000, 0b111_00000, 0b111_00000, 0b111_00000, 0b101_00000, // 'N'
    0b010_00000, 0b101_00000, 0b101_00000, 0b101_00000, 0b010_00000, // 'O'
    0b110_00000, 0b101_00000, 0b110_00000, 0b100_00000, 0b100_00000, // 'P'
    0b010_00000, 0b101_00000, 0b101_00000, 0b111_00000, 0b011_00000, // 'Q'
    0b110_00000, 0b101_00000, 0b110_00000, 0b101_00000, 0b101_00000, // 'R'
    0b011_00000, 0b100_00000, 0b010_00000, 0b001_00000, 0b110_00000, // 'S'
    0b111_00000, 0b010_00000, 0b010_00000, 0b010_00000, 0b010_00000, // 'T'
    0b101_00000, 0b101_00000, 0b101_00000, 0b101_00000, 0b011_00000, // 'U'
    0b101_00000, 0b101_00000, 0b101_00000, 0b010_00000, 0b010_00000, // 'V'
    0b101_00000, 0b101_00000, 0b111_00000, 0b111_00000, 0b101_00000, // 'W'
    0b101_00000, 0b101_00000, 0b010_00000, 0b101_00000, 0b101_00000, // 'X'
    0b101_00000, 0b101_00000, 0b010_00000, 0b010_00000, 0b010_00000, // 'Y'
    0b111_00000, 0b001_00000, 0b010_00000, 0b100_00000, 0b111_00000, // 'Z'
    0b111_00000, 0b100_00000, 0b100_00000, 0b100_00000, 0b111_00000, // '['
    0b000_00000, 0b100_00000, 0b010_00000, 0b001_00000, 0b000_00000, // '\\'
    0b111_00000, 0b001_00000, 0b001_00000, 0b001_00000, 0b111_00000, // ']'
    0b010_00000, 0b101_00000, 0b000_00000, 0b000_00000, 0b000_00000, // '^'
    0b000_00000, 0b000_00000, 0b000_00000, 0b000_00000, 0b111_00000, // '_'
    0b100_00000, 0b010_00000, 0b000_00000, 0b000_00000, 0b000_00000, // '`'
    0b000_00000, 0b110_00000, 0b011_00000, 0b101_00000, 0b111_00000, // 'a'
    0b100_00000, 0b110_00000, 0b101_00000, 0b101_00000, 0b110_00000, // 'b'
    0b000_00000, 0b011_00000, 0b100_00000, 0b100_00000, 0b011_00000, // 'c'
    0b001_00000, 0b011_00000, 0b101_00000, 0b101_00000, 0b011_00000, // 'd'
    0b000_00000, 0b011_00000, 0b101_00000, 0b110_00000, 0b011_00000, // 'e'
    0b001_00000, 0b010_00000, 0b111_00000, 0b010_00000, 0b010_00000, // 'f'
    0b000_00000, 0b011_00000, 0b101_00000, 0b111_00000, 0b001_00000, // 'g'
    0b100_00000, 0b110_00000, 0b101_00000, 0b101_00000, 0b101_00000, // 'h'
    0b010_00000, 0b000_00000, 0b010_00000, 0b010_00000, 0b010_00000, // 'i'
    0b001_00000, 0b000_00000, 0b001_00000, 0b101_00000, 0b010_00000, // 'j'
    0b100_00000, 0b101_00000, 0b110_00000, 0b110_00000, 0b101_00000, // 'k'
    0b110_00000, 0b010_00000, 0b010_00000, 0b010_00000, 0b111_00000, // 'l'
    0b000_00000, 0b111_00000, 0b111_00000, 0b111_00000, 0b101_00000, // 'm'
    0b000_00000, 0b110_00000, 0b101_00000, 0b101_00000, 0b101_00000, // 'n'
    0b000_00000, 0b010_00000, 0b101_00000, 0b101_00000, 0b010_00000, // 'o'
    0b000_00000, 0b110_00000, 0b101_00000, 0b110_00000, 0b100_00000, // 'p'
    0b000_00000, 0b011_00000, 0b101_00000, 0b011_00000, 0b001_00000, // 'q'
    0b000_00000, 0b011_00000, 0b100_00000, 0b100_00000, 0b100_00000, // 'r'
    0b000_00000, 0b011_00000, 0b110_00000, 0b011_00000, 0b110_00000, // 's'
    0b010_00000, 0b111_00000, 0b010_00000, 0b010_00000, 0b011_00000, // 't'
    0b000_00000, 0b101_00000, 0b101_00000, 0b101_00000, 0b011_00000, // 'u'
    0b000_00000, 0b101_00000, 0b101_00000, 0b010_00000, 0b010_00000, // 'v'
    0b000_00000, 0b101_00000, 0b111_00000, 0b111_00000, 0b111_00000, // 'w'
    0b000_00000, 0b101_00000, 0b010_00000, 0b010_00000, 0b101_00000, // 'x'
    0b000_00000, 0b101_00000, 0b101_00000, 0b011_00000, 0b001_00000, // 'y'
    0b000_00000, 0b111_00000, 0b011_00000, 0b110_00000, 0b111_00000, // 'z'
    0b011_00000, 0b010_00000, 0b110_00000, 0b010_00000, 0b011_00000, // '{'
    0b010_00000, 0b010_00000, 0b010_00000, 0b010_00000, 0b010_00000, // '|'
    0b110_00000, 0b010_00000, 0b011_00000, 0b010_00000, 0b110_00000, // '}'
    0b000_00000, 0b011_00000, 0b110_00000, 0b000_00000, 0b000_00000, // '~'
];

#[cfg(test)]
mod tests {
    use super::*;

    // A 5x5 font whose glyph for code 32 + n has every row equal to n, covering ' ' up to '@'.
    fn numbered_font_bitmaps() -> [u8; 33 * 5] {
        let mut bitmaps = [0u8; 33 * 5];
        for (i, b) in bitmaps.iter_mut().enumerate() {
            *b = (i / 5) as u8;
        }
        bitmaps
    }

    #[test]
    fn construct() {
        let bitmaps = numbered_font_bitmaps();
        let font = Font::new(5, 5, &bitmaps).unwrap();
        assert_eq!(font.glyph_count(), 33);
        assert_eq!(font.advance(), 6);

        assert_eq!(Font::new(0, 5, &bitmaps).err(), Some(InvalidDimensions));
        assert_eq!(Font::new(5, 0, &bitmaps).err(), Some(InvalidDimensions));
        // Taller than a tile, even with a table holding whole glyphs up to '@'.
        assert_eq!(Font::new(5, 6, &[0u8; 6 * 33]).err(), Some(InvalidDimensions));
        assert!(Font::new(5, 5, &[0u8; 5 * 33]).is_ok());
        // Partial glyph at the end.
        assert_eq!(Font::new(5, 5, &bitmaps[..164]).err(), Some(InvalidDimensions));
        // Too short to hold '?'.
        assert_eq!(Font::new(5, 5, &bitmaps[..31 * 5]).err(), Some(InvalidDimensions));
        assert!(Font::new(5, 5, &bitmaps[..32 * 5]).is_ok());
    }

    #[test]
    fn glyph_lookup() {
        let bitmaps = numbered_font_bitmaps();
        let font = Font::new(5, 5, &bitmaps).unwrap();
        assert_eq!(font.glyph(' ').bits(), &[0, 0, 0, 0, 0][..]);
        assert_eq!(font.glyph('!').bits(), &[1, 1, 1, 1, 1][..]);
        assert_eq!(font.glyph('@').bits(), &[32, 32, 32, 32, 32][..]);
        let glyph = font.glyph('#');
        assert_eq!((glyph.width(), glyph.height()), (5, 5));
    }

    #[test]
    fn glyph_lookup_is_idempotent() {
        let first = FONT_3X5.glyph('A');
        for _ in 0..4 {
            assert_eq!(FONT_3X5.glyph('A'), first);
        }
    }

    #[test]
    fn table_boundary() {
        let bitmaps = numbered_font_bitmaps();
        let font = Font::new(5, 5, &bitmaps).unwrap();
        let question = font.glyph('?');
        assert!(font.is_valid_index(32));
        assert!(!font.is_valid_index(33));
        // '@' is the last glyph in the table and must not fall back.
        assert_ne!(font.glyph('@'), question);
        // 'A' is the first code past the end of the table.
        assert_eq!(font.glyph('A'), question);
        assert_eq!(font.glyph('B'), question);
        assert_eq!(font.glyph('\u{7f}'), question);
        assert_eq!(font.glyph('\u{e9}'), question);
        assert_eq!(font.glyph('\n'), question);
        assert_eq!(font.glyph('\0'), question);
    }

    #[test]
    fn builtin_font_boundary() {
        assert_eq!(FONT_3X5.glyph_count(), 95);
        assert_ne!(FONT_3X5.glyph('~'), FONT_3X5.glyph('?'));
        assert_eq!(FONT_3X5.glyph('\u{7f}'), FONT_3X5.glyph('?'));
        assert_eq!(
            FONT_3X5.glyph('A').bits(),
            &[0b010_00000, 0b101_00000, 0b111_00000, 0b101_00000, 0b101_00000][..]
        );
    }
}
