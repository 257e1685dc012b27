//! Color index handling.
//!
//! Indices 1..=256 select the xterm-256 palette (entry `index - 1`).
//! Indices 257..=378 select a fully saturated hue sweep. Anything else
//! falls back to `DEFAULT_COLOR_INDEX`.

use crate::types::{Rgb, DEFAULT_COLOR_INDEX, MAX_COLOR_INDEX, MIN_COLOR_INDEX};

const PALETTE_LEN: u16 = 256;
const HUE_STEPS: u16 = MAX_COLOR_INDEX - PALETTE_LEN;

const SYSTEM: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(128, 0, 0),
    Rgb::new(0, 128, 0),
    Rgb::new(128, 128, 0),
    Rgb::new(0, 0, 128),
    Rgb::new(128, 0, 128),
    Rgb::new(0, 128, 128),
    Rgb::new(192, 192, 192),
    Rgb::new(128, 128, 128),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Clamp a requested color index into range.
///
/// Out-of-range values are not an error; they resolve to the default.
pub fn resolve_color_index(requested: i64) -> u16 {
    if (MIN_COLOR_INDEX as i64..=MAX_COLOR_INDEX as i64).contains(&requested) {
        requested as u16
    } else {
        DEFAULT_COLOR_INDEX
    }
}

/// RGB value for a color index (resolved first).
pub fn color_rgb(index: u16) -> Rgb {
    let index = resolve_color_index(index as i64);
    if index <= PALETTE_LEN {
        xterm_rgb((index - 1) as u8)
    } else {
        hue_rgb(index - PALETTE_LEN - 1)
    }
}

fn xterm_rgb(entry: u8) -> Rgb {
    match entry {
        0..=15 => SYSTEM[entry as usize],
        16..=231 => {
            let n = entry - 16;
            Rgb::new(
                CUBE_LEVELS[(n / 36) as usize],
                CUBE_LEVELS[((n / 6) % 6) as usize],
                CUBE_LEVELS[(n % 6) as usize],
            )
        }
        _ => {
            let v = 8 + (entry - 232) * 10;
            Rgb::new(v, v, v)
        }
    }
}

fn hue_rgb(step: u16) -> Rgb {
    // Hue in [0, 360) scaled by 60 so each sextant is 0..60.
    let h = (step as u32 * 360) / HUE_STEPS as u32;
    let f = ((h % 60) * 255 / 60) as u8;
    let (r, g, b) = match h / 60 {
        0 => (255, f, 0),
        1 => (255 - f, 255, 0),
        2 => (0, 255, f),
        3 => (0, 255 - f, 255),
        4 => (f, 0, 255),
        _ => (255, 0, 255 - f),
    };
    Rgb::new(r, g, b)
}
