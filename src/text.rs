//! Fixed-width text fields drawn with a monospace font.

use core::iter;

use crate::canvas::Canvas;
use crate::font::Font;

/// Drawn in place of the tail of text too long for its field.
pub const ELLIPSIS: &str = "..";

/// Pads text too short for its field.
pub const FILLER: char = '.';

/// Number of glyph cells, each a glyph plus one column of spacing, that fit across `width`.
pub fn max_columns(width: usize, font: &Font) -> usize {
    width / font.advance()
}

/// Draw `text` as a field of glyph cells spanning the whole width of the canvas, starting with the
/// upper left corner of the first glyph at (`x`, `y`).
///
/// The field is always exactly `max_columns(canvas.width(), font)` cells: text too long for it is
/// cut short and ends in `ELLIPSIS`, and text too short is padded out with `FILLER`. The field
/// needs room for every cell, so `x` is normally 0. Returns the cursor column just past the last
/// cell.
pub fn draw_string(canvas: &mut Canvas, x: usize, y: usize, text: &str, font: &Font) -> usize {
    let columns = max_columns(canvas.width(), font);
    let len = text.chars().count();

    let kept = if len <= columns {
        len
    } else if columns >= ELLIPSIS.len() {
        columns - ELLIPSIS.len()
    } else {
        columns
    };
    let marker = if len > columns && columns >= ELLIPSIS.len() {
        ELLIPSIS
    } else {
        ""
    };
    let cells = text
        .chars()
        .take(kept)
        .chain(marker.chars())
        .chain(iter::repeat(FILLER))
        .take(columns);

    let mut cursor = x;
    for c in cells {
        canvas.draw(cursor, y, font.glyph(c).source());
        cursor += font.advance();
    }
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FONT_3X5;
    use std::vec::Vec;

    // A 5x5 font from ' ' to 'Z' in which each glyph spells out its own table index in binary
    // across its first two rows, so every glyph is distinct.
    fn marker_font_bitmaps() -> Vec<u8> {
        let mut bitmaps = Vec::new();
        for i in 0..59u8 {
            bitmaps.extend_from_slice(&[(i & 0x1F) << 3, (i >> 5) << 3, 0, 0, 0]);
        }
        bitmaps
    }

    fn cell(canvas: &Canvas, x: usize) -> Vec<u8> {
        (0..5)
            .flat_map(|y| (x..x + 5).map(move |cx| (cx, y)))
            .map(|(cx, y)| canvas.pixel(cx, y))
            .collect()
    }

    fn expect_field(text: &str, font: &Font) -> Canvas {
        let mut canvas = Canvas::new(48, 5).unwrap();
        for (i, c) in text.chars().enumerate() {
            canvas.draw(i * 6, 0, font.glyph(c).source());
        }
        canvas
    }

    #[test]
    fn columns() {
        let bitmaps = marker_font_bitmaps();
        let font = Font::new(5, 5, &bitmaps).unwrap();
        assert_eq!(max_columns(48, &font), 8);
        assert_eq!(max_columns(47, &font), 7);
        assert_eq!(max_columns(24, &FONT_3X5), 6);
    }

    #[test]
    fn truncated_with_ellipsis() {
        let bitmaps = marker_font_bitmaps();
        let font = Font::new(5, 5, &bitmaps).unwrap();
        let mut canvas = Canvas::new(48, 5).unwrap();
        let end = draw_string(&mut canvas, 0, 0, "ABCDEFGHIJ", &font);
        assert_eq!(end, 48);
        assert_eq!(canvas, expect_field("ABCDEF..", &font));
    }

    #[test]
    fn exact_fit_unchanged() {
        let bitmaps = marker_font_bitmaps();
        let font = Font::new(5, 5, &bitmaps).unwrap();
        let mut canvas = Canvas::new(48, 5).unwrap();
        let end = draw_string(&mut canvas, 0, 0, "ABCDEFGH", &font);
        assert_eq!(end, 48);
        assert_eq!(canvas, expect_field("ABCDEFGH", &font));
    }

    #[test]
    fn short_text_padded() {
        let bitmaps = marker_font_bitmaps();
        let font = Font::new(5, 5, &bitmaps).unwrap();
        let mut canvas = Canvas::new(48, 5).unwrap();
        let end = draw_string(&mut canvas, 0, 0, "ABC", &font);
        assert_eq!(end, 48);
        assert_eq!(canvas, expect_field("ABC.....", &font));
        assert_eq!(cell(&canvas, 18), cell(&expect_field(".", &font), 0));
    }

    #[test]
    fn cursor_advances_per_cell() {
        let bitmaps = marker_font_bitmaps();
        let font = Font::new(5, 5, &bitmaps).unwrap();
        for text in &["", "A", "ABCDEFGH", "ABCDEFGHIJKLMNOP"] {
            let mut canvas = Canvas::new(50, 5).unwrap();
            assert_eq!(draw_string(&mut canvas, 0, 0, text, &font), 8 * 6);
            // The spacing columns and the leftover columns past the field stay dark.
            for y in 0..5 {
                for x in (5..48).step_by(6).chain(48..50) {
                    assert_eq!(canvas.pixel(x, y), 0);
                }
            }
        }
    }

    #[test]
    fn field_too_narrow_for_ellipsis() {
        let bitmaps = marker_font_bitmaps();
        let font = Font::new(5, 5, &bitmaps).unwrap();
        let mut canvas = Canvas::new(6, 5).unwrap();
        assert_eq!(draw_string(&mut canvas, 0, 0, "AB", &font), 6);
        assert_eq!(cell(&canvas, 0), cell(&expect_field("A", &font), 0));
    }

    #[test]
    fn non_ascii_drawn_as_question_mark() {
        let mut canvas = Canvas::new(24, 5).unwrap();
        draw_string(&mut canvas, 0, 0, "é", &FONT_3X5);
        let mut expect = Canvas::new(24, 5).unwrap();
        draw_string(&mut expect, 0, 0, "?", &FONT_3X5);
        assert_eq!(canvas, expect);
    }
}
