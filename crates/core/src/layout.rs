//! Layout engine: turns a formatted time string into a display matrix.
//!
//! Glyphs are concatenated left to right with one blank spacer column
//! between consecutive characters. The result is a fixed-height frame
//! (`FRAME_HEIGHT`) with the glyph rows vertically padded by one blank row.

use crate::glyph::glyph_for;
use crate::types::{Size, FRAME_HEIGHT, GLYPH_ROW_OFFSET};

const ROWS: usize = FRAME_HEIGHT as usize;

/// Row-major boolean matrix for one rendered time string.
///
/// Every row has the same width. The matrix is rebuilt for each frame and
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMatrix {
    rows: [Vec<bool>; ROWS],
    width: u16,
}

impl DisplayMatrix {
    /// Build the matrix for `text`.
    ///
    /// Characters without a glyph contribute only their spacer column.
    pub fn build(text: &str) -> Self {
        let mut rows: [Vec<bool>; ROWS] = Default::default();

        for (i, ch) in text.chars().enumerate() {
            if i > 0 {
                for row in rows.iter_mut() {
                    row.push(false);
                }
            }
            if let Some(glyph) = glyph_for(ch) {
                for (r, bits) in glyph.rows().iter().enumerate() {
                    rows[r + GLYPH_ROW_OFFSET].extend_from_slice(bits);
                }
            }
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in rows.iter_mut() {
            row.resize(width, false);
        }

        Self {
            rows,
            width: u16::try_from(width).unwrap_or(u16::MAX),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        FRAME_HEIGHT
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, FRAME_HEIGHT)
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Cell at `(x, y)`; out-of-bounds cells read as off.
    pub fn get(&self, x: u16, y: u16) -> bool {
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{COLON_WIDTH, DIGIT_WIDTH};

    #[test]
    fn width_is_glyphs_plus_spacers() {
        let m = DisplayMatrix::build("12:30");
        let glyphs = 4 * DIGIT_WIDTH + COLON_WIDTH;
        assert_eq!(m.width() as usize, glyphs + 4);
        assert_eq!(m.width(), 32);
        assert_eq!(m.height(), FRAME_HEIGHT);
        assert_eq!(m.size(), Size::new(32, FRAME_HEIGHT));
    }

    #[test]
    fn seconds_layout_width() {
        // 6 digits, 2 colons, 7 spacers.
        let m = DisplayMatrix::build("23:59:59");
        assert_eq!(m.width(), 6 * 6 + 2 * 4 + 7);
    }

    #[test]
    fn all_rows_share_width() {
        let m = DisplayMatrix::build("08:15");
        for row in m.rows() {
            assert_eq!(row.len(), m.width() as usize);
        }
    }

    #[test]
    fn padding_rows_are_blank() {
        let m = DisplayMatrix::build("88:88");
        assert!(m.rows()[0].iter().all(|&c| !c));
        assert!(m.rows()[FRAME_HEIGHT as usize - 1].iter().all(|&c| !c));
    }

    #[test]
    fn spacer_column_separates_glyphs() {
        let m = DisplayMatrix::build("88");
        for y in 0..m.height() {
            assert!(!m.get(DIGIT_WIDTH as u16, y));
        }
        // Second glyph starts right after the spacer.
        assert!(m.get(DIGIT_WIDTH as u16 + 1, 1));
    }

    #[test]
    fn glyph_rows_are_offset_by_one() {
        let m = DisplayMatrix::build("1");
        assert!(!m.get(4, 0));
        for y in 1..=5 {
            assert!(m.get(4, y));
            assert!(!m.get(0, y));
        }
    }

    #[test]
    fn unknown_characters_keep_only_their_spacer() {
        let with_unknown = DisplayMatrix::build("1x2");
        let plain = DisplayMatrix::build("12");
        assert_eq!(with_unknown.width(), plain.width() + 1);
    }

    #[test]
    fn empty_string_has_zero_width() {
        let m = DisplayMatrix::build("");
        assert_eq!(m.width(), 0);
        assert_eq!(m.height(), FRAME_HEIGHT);
        assert!(!m.get(0, 0));
    }
}
