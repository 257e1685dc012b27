//! Position resolver: where the display matrix goes inside the terminal.
//!
//! Pure functions over sizes and offsets. Arithmetic is done in `i32` and
//! clamped back into `u16` so undersized terminals never underflow.

use crate::types::{Origin, Size, CENTER_Y_BIAS, DATE_MARGIN};

/// Resolve the top-left origin of the display.
///
/// Centering overrides `manual`. Otherwise `manual` is pulled back so the
/// display (plus the date line below it, when shown) stays on-screen; an
/// axis where the display does not fit at all resolves to 0.
pub fn resolve_origin(
    terminal: Size,
    display: Size,
    center: bool,
    manual: Origin,
    show_date: bool,
) -> Origin {
    if center {
        centered_origin(terminal, display)
    } else {
        clamp_offset(terminal, display, manual, show_date)
    }
}

/// Origin that centers `display` in `terminal`.
pub fn centered_origin(terminal: Size, display: Size) -> Origin {
    let x = (terminal.width as i32 - display.width as i32) / 2 - 1;
    let y = (terminal.height as i32 - display.height as i32) / 2 + CENTER_Y_BIAS;
    Origin::new(to_u16(x), to_u16(y))
}

/// Clamp a manual offset to keep the display on-screen.
pub fn clamp_offset(terminal: Size, display: Size, offset: Origin, show_date: bool) -> Origin {
    Origin::new(
        offset.x.min(max_x(terminal, display)),
        offset.y.min(max_y(terminal, display, show_date)),
    )
}

/// Largest x that keeps the display's right edge inside the terminal.
pub fn max_x(terminal: Size, display: Size) -> u16 {
    terminal.width.saturating_sub(display.width)
}

/// Largest y that keeps the display (and the date line, if shown) inside
/// the terminal.
pub fn max_y(terminal: Size, display: Size, show_date: bool) -> u16 {
    let margin = if show_date { DATE_MARGIN } else { 0 };
    terminal
        .height
        .saturating_sub(display.height.saturating_add(margin))
}

/// Column (relative to the origin) at which a date of `date_len` chars
/// is centered under a display `display_width` wide.
pub fn date_column(display_width: u16, date_len: usize) -> u16 {
    let len = i32::try_from(date_len).unwrap_or(i32::MAX);
    to_u16((display_width as i32).saturating_sub(len) / 2 + 1)
}

fn to_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}
