//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the clock.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (layout, input handling, terminal rendering).
//!
//! # Frame Geometry
//!
//! The clock face is drawn as a fixed-height frame of boolean cells:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GLYPH_ROWS` | 5 | Rows in every glyph bitmap |
//! | `FRAME_HEIGHT` | 7 | Glyph rows plus one blank row above and below |
//! | `GLYPH_ROW_OFFSET` | 1 | First frame row occupied by glyph rows |
//! | `DATE_ROW` | 7 | Row (relative to the origin) of the date line |
//! | `DATE_MARGIN` | 1 | Rows reserved under the frame for the date line |
//!
//! # Colors
//!
//! Color indices run from `MIN_COLOR_INDEX` (1) to `MAX_COLOR_INDEX` (378).
//! Anything outside that range falls back to `DEFAULT_COLOR_INDEX` (2).
//!
//! # Examples
//!
//! ```
//! use tui_clock_types::{ClockAction, Size, FRAME_HEIGHT};
//!
//! assert_eq!(ClockAction::ToggleSeconds.as_str(), "toggleSeconds");
//! assert!(ClockAction::MoveLeft.is_manual_move());
//!
//! let size = Size::new(80, 24);
//! assert!(size.height > FRAME_HEIGHT);
//! ```

/// Rows in every glyph bitmap.
pub const GLYPH_ROWS: usize = 5;

/// Width of a digit glyph in cells.
pub const DIGIT_WIDTH: usize = 6;

/// Width of the colon glyph in cells.
pub const COLON_WIDTH: usize = 4;

/// Height of the display matrix: glyph rows padded by one blank row on each side.
pub const FRAME_HEIGHT: u16 = 7;

/// Frame row where glyph row 0 lands.
pub const GLYPH_ROW_OFFSET: usize = 1;

/// Row of the date line, relative to the display origin.
pub const DATE_ROW: u16 = 7;

/// Rows kept free below the frame so the date line stays on-screen.
pub const DATE_MARGIN: u16 = 1;

/// Vertical bias added to the centered origin.
pub const CENTER_Y_BIAS: i32 = 0;

/// Smallest accepted color index.
pub const MIN_COLOR_INDEX: u16 = 1;

/// Largest accepted color index.
pub const MAX_COLOR_INDEX: u16 = 378;

/// Color index used when the requested one is out of range.
pub const DEFAULT_COLOR_INDEX: u16 = 2;


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Width and height in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Top-left terminal coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Origin {
    pub x: u16,
    pub y: u16,
}

impl Origin {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Actions that mutate the clock's option/position state.
///
/// Produced by the input layer from key presses and resize events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockAction {
    /// Leave the program
    Quit,
    /// Switch between 12- and 24-hour time
    ToggleTwelveHour,
    /// Show or hide seconds
    ToggleSeconds,
    /// Switch between centered and manual positioning
    ToggleCenter,
    /// Show or hide the date line
    ToggleDate,
    /// Move one row down without any bounds check (down arrow)
    NudgeDown,
    /// Move one column left (manual positioning only)
    MoveLeft,
    /// Move one row down (manual positioning only)
    MoveDown,
    /// Move one row up (manual positioning only)
    MoveUp,
    /// Move one column right (manual positioning only)
    MoveRight,
    /// Terminal was resized
    Resize(Size),
}

impl ClockAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockAction::Quit => "quit",
            ClockAction::ToggleTwelveHour => "toggleTwelveHour",
            ClockAction::ToggleSeconds => "toggleSeconds",
            ClockAction::ToggleCenter => "toggleCenter",
            ClockAction::ToggleDate => "toggleDate",
            ClockAction::NudgeDown => "nudgeDown",
            ClockAction::MoveLeft => "moveLeft",
            ClockAction::MoveDown => "moveDown",
            ClockAction::MoveUp => "moveUp",
            ClockAction::MoveRight => "moveRight",
            ClockAction::Resize(_) => "resize",
        }
    }

    /// Whether this action repositions the clock manually.
    pub fn is_manual_move(&self) -> bool {
        matches!(
            self,
            ClockAction::MoveLeft
                | ClockAction::MoveDown
                | ClockAction::MoveUp
                | ClockAction::MoveRight
        )
    }
}
