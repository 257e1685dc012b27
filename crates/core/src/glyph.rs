//! Glyph table: block bitmaps for the characters a clock face needs.
//!
//! Each glyph is five rows tall. Digits are six cells wide, the colon four.
//! The table is fixed at compile time.

use crate::types::GLYPH_ROWS;

/// An immutable 5-row bitmap for one displayable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [&'static [bool]; GLYPH_ROWS],
}

impl Glyph {
    pub fn rows(&self) -> &[&'static [bool]; GLYPH_ROWS] {
        &self.rows
    }

    /// Width in cells (all rows share it).
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }
}

const O: bool = false;
const X: bool = true;

// Digit row patterns.
const FULL: &[bool] = &[X, X, X, X, X, X];
const SIDES: &[bool] = &[X, X, O, O, X, X];
const RIGHT: &[bool] = &[O, O, O, O, X, X];
const LEFT: &[bool] = &[X, X, O, O, O, O];

// Colon row patterns.
const GAP: &[bool] = &[O, O, O, O];
const DOT: &[bool] = &[O, X, X, O];

const fn glyph(rows: [&'static [bool]; GLYPH_ROWS]) -> Glyph {
    Glyph { rows }
}

static DIGITS: [Glyph; 10] = [
    glyph([FULL, SIDES, SIDES, SIDES, FULL]),   // 0
    glyph([RIGHT, RIGHT, RIGHT, RIGHT, RIGHT]), // 1
    glyph([FULL, RIGHT, FULL, LEFT, FULL]),     // 2
    glyph([FULL, RIGHT, FULL, RIGHT, FULL]),    // 3
    glyph([SIDES, SIDES, FULL, RIGHT, RIGHT]),  // 4
    glyph([FULL, LEFT, FULL, RIGHT, FULL]),     // 5
    glyph([FULL, LEFT, FULL, SIDES, FULL]),     // 6
    glyph([FULL, RIGHT, RIGHT, RIGHT, RIGHT]),  // 7
    glyph([FULL, SIDES, FULL, SIDES, FULL]),    // 8
    glyph([FULL, SIDES, FULL, RIGHT, FULL]),    // 9
];

static COLON: Glyph = glyph([GAP, DOT, GAP, DOT, GAP]);

/// Look up the glyph for `ch`.
///
/// Returns `None` for anything other than `0-9` and `:`.
pub fn glyph_for(ch: char) -> Option<&'static Glyph> {
    match ch {
        '0'..='9' => Some(&DIGITS[(ch as u8 - b'0') as usize]),
        ':' => Some(&COLON),
        _ => None,
    }
}
