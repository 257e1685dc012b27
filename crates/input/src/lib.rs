//! Terminal input module.
//!
//! Maps `crossterm` key and resize events into [`crate::types::ClockAction`]
//! and applies them to the shared clock state from a dedicated thread.

pub mod handler;
pub mod map;

pub use tui_clock_core as core;
pub use tui_clock_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, map_event, should_quit};
