//! Terminal clock renderer.
//!
//! A small rendering layer for the clock face. It renders into a plain
//! framebuffer which is then flushed to a terminal backend, rather than
//! going through a widget toolkit.
//!
//! - [`clock_view`]: pure mapping of a prepared frame into a framebuffer
//! - [`renderer`]: crossterm output with full and diff redraws
//! - [`render_loop`]: the once-per-second / force-update redraw loop

pub mod clock_view;
pub mod fb;
pub mod render_loop;
pub mod renderer;

pub use tui_clock_core as core;
pub use tui_clock_types as types;

pub use clock_view::{ClockFrame, ClockPalette, ClockView};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use render_loop::{prepare_frame, until_next_second, wait_for_redraw, RenderLoop};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
