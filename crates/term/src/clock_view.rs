//! ClockView: maps a prepared clock frame into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{color_rgb, date_column, DateText, DisplayMatrix};
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Origin, Rgb, Size, DATE_ROW};

/// Everything needed to paint one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFrame {
    pub matrix: DisplayMatrix,
    pub origin: Origin,
    /// Date line, if visible.
    pub date: Option<DateText>,
    pub color_index: u16,
    pub viewport: Size,
}

/// Styles derived from a color index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockPalette {
    /// Lit glyph cells: the color as background.
    pub on: CellStyle,
    /// Unlit cells and empty screen: the color as foreground.
    pub off: CellStyle,
}

impl ClockPalette {
    pub fn from_index(color_index: u16) -> Self {
        let off = CellStyle::new(color_rgb(color_index), Rgb::new(0, 0, 0));
        Self {
            on: off.inverted(),
            off,
        }
    }
}

/// Terminal renderer for the clock face.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockView;

impl ClockView {
    pub fn new() -> Self {
        Self
    }

    /// Render `frame` into an existing framebuffer.
    ///
    /// The buffer is resized to the frame's viewport and fully repainted.
    pub fn render_into(&self, frame: &ClockFrame, fb: &mut FrameBuffer) {
        let palette = ClockPalette::from_index(frame.color_index);
        fb.resize(frame.viewport.width, frame.viewport.height);
        fb.clear(Cell::blank(palette.off));

        let Origin { x: ox, y: oy } = frame.origin;
        for (dy, row) in frame.matrix.rows().iter().enumerate() {
            for (dx, &lit) in row.iter().enumerate() {
                let style = if lit { palette.on } else { palette.off };
                fb.set(
                    ox.saturating_add(dx as u16),
                    oy.saturating_add(dy as u16),
                    Cell::blank(style),
                );
            }
        }

        if let Some(date) = &frame.date {
            let col = date_column(frame.matrix.width(), date.chars().count());
            fb.put_str(
                ox.saturating_add(col),
                oy.saturating_add(DATE_ROW),
                date.as_str(),
                palette.off,
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &ClockFrame) -> FrameBuffer {
        let mut fb = FrameBuffer::new(frame.viewport.width, frame.viewport.height);
        self.render_into(frame, &mut fb);
        fb
    }
}
