//! Core clock logic - pure, deterministic, and testable
//!
//! This crate contains everything that decides *what* the clock shows and
//! *where*. It has no dependency on the terminal, making it:
//!
//! - **Deterministic**: The same time and options always produce the same frame
//! - **Testable**: Layout and positioning are plain functions over sizes
//! - **Portable**: Usable with any backend that can paint a grid of cells
//!
//! # Module Structure
//!
//! - [`glyph`]: 5-row block bitmaps for `0-9` and `:`
//! - [`layout`]: glyph concatenation into a [`DisplayMatrix`]
//! - [`position`]: centering, clamping and date placement
//! - [`format`]: time and date text in 12/24-hour modes
//! - [`color`]: color index clamping and palette lookup
//! - [`state`]: the shared option/position record
//! - [`signal`]: the coalescing force-update signal
//!
//! # Example
//!
//! ```
//! use tui_clock_core::{resolve_origin, DisplayMatrix};
//! use tui_clock_types::{Origin, Size};
//!
//! let matrix = DisplayMatrix::build("12:30");
//! assert_eq!(matrix.width(), 32);
//!
//! let origin = resolve_origin(Size::new(80, 24), matrix.size(), true, Origin::default(), true);
//! assert_eq!(origin, Origin::new(23, 8));
//! ```

pub mod color;
pub mod format;
pub mod glyph;
pub mod layout;
pub mod position;
pub mod signal;
pub mod state;

pub use tui_clock_types as types;

// Re-export commonly used types for convenience
pub use color::{color_rgb, resolve_color_index};
pub use format::{format_date, format_time, DateText, TimeText};
pub use glyph::{glyph_for, Glyph};
pub use layout::DisplayMatrix;
pub use position::{clamp_offset, date_column, resolve_origin};
pub use signal::ForceUpdate;
pub use state::{ApplyOutcome, ClockState, SharedState};
