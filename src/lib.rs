//! TUI Clock (workspace facade crate).
//!
//! Re-exports the member crates as `tui_clock::{core,input,term,types}` and
//! hosts the binary's command-line and logging setup.

pub mod cli;
pub mod logging;

pub use tui_clock_core as core;
pub use tui_clock_input as input;
pub use tui_clock_term as term;
pub use tui_clock_types as types;
