//! Command-line flags.

use clap::Parser;

use crate::core::ClockState;
use crate::types::{Size, DEFAULT_COLOR_INDEX};

/// Large block-digit clock for the terminal.
///
/// Keys: q/Esc quit, t 12-hour, s seconds, c center, d date,
/// h/j/k/l move (when not centered).
#[derive(Debug, Clone, Parser)]
#[command(name = "tui-clock", version, about, long_about = None)]
pub struct Cli {
    /// Display seconds
    #[arg(short = 's', long)]
    pub seconds: bool,

    /// Center the clock
    #[arg(short = 'c', long)]
    pub center: bool,

    /// Display in 12 hour format
    #[arg(short = 't', long = "twelve-hour")]
    pub twelve_hour: bool,

    /// Color index (1-378); out-of-range values use the default
    #[arg(
        short = 'C',
        long,
        value_name = "N",
        default_value_t = DEFAULT_COLOR_INDEX as i64,
        allow_negative_numbers = true
    )]
    pub color: i64,

    /// Hide the date line
    #[arg(short = 'D', long = "no-date")]
    pub no_date: bool,
}

impl Cli {
    /// Initial clock state for a terminal of the given size.
    pub fn into_state(self, terminal: Size) -> ClockState {
        ClockState::new(terminal)
            .with_seconds(self.seconds)
            .with_center(self.center)
            .with_twelve_hour(self.twelve_hour)
            .with_show_date(!self.no_date)
            .with_color_index(self.color)
    }
}
