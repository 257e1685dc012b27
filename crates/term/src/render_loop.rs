//! Render loop: redraws the clock once per second and on force-update.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveDateTime, Timelike};

use crate::clock_view::{ClockFrame, ClockView};
use crate::core::{format_date, format_time, DisplayMatrix, ForceUpdate, SharedState};
use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::types::Size;

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Build the frame for `now` from the shared state.
///
/// Text is formatted under the read lock; the display size and clamped
/// offset are stored under the write lock.
pub fn prepare_frame(state: &SharedState, now: &NaiveDateTime) -> ClockFrame {
    let (time, date) = {
        let s = state.read();
        (
            format_time(now, s.twelve_hour, s.seconds),
            s.show_date.then(|| format_date(now, s.twelve_hour)),
        )
    };

    let matrix = DisplayMatrix::build(&time);

    let mut s = state.write();
    let origin = s.place(matrix.size());
    ClockFrame {
        matrix,
        origin,
        date,
        color_index: s.color_index,
        viewport: s.terminal,
    }
}

/// Time left until the next whole second after `now`.
pub fn until_next_second(now: &NaiveDateTime) -> Duration {
    let subsec = now.nanosecond().min(NANOS_PER_SEC - 1);
    Duration::from_nanos(u64::from(NANOS_PER_SEC - subsec))
}

/// Block until either a force-update arrives or `timeout` elapses.
pub async fn wait_for_redraw(force: &ForceUpdate, timeout: Duration) {
    tokio::select! {
        _ = force.wait() => {}
        _ = tokio::time::sleep(timeout) => {}
    }
}

pub struct RenderLoop<W: Write> {
    state: SharedState,
    force: ForceUpdate,
    view: ClockView,
    renderer: TerminalRenderer<W>,
    fb: FrameBuffer,
    last_viewport: Size,
}

impl<W: Write> RenderLoop<W> {
    pub fn new(state: SharedState, force: ForceUpdate, renderer: TerminalRenderer<W>) -> Self {
        Self {
            state,
            force,
            view: ClockView::new(),
            renderer,
            fb: FrameBuffer::new(0, 0),
            last_viewport: Size::default(),
        }
    }

    /// Paint one frame for `now`.
    pub fn redraw(&mut self, now: &NaiveDateTime) -> Result<()> {
        let frame = prepare_frame(&self.state, now);
        if frame.viewport != self.last_viewport {
            log::debug!(
                "viewport {}x{} -> {}x{}",
                self.last_viewport.width,
                self.last_viewport.height,
                frame.viewport.width,
                frame.viewport.height
            );
            self.renderer.invalidate();
            self.last_viewport = frame.viewport;
        }
        self.view.render_into(&frame, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    /// Redraw forever. Returns only on a rendering error.
    pub async fn run(mut self) -> Result<()> {
        let mut clock = || Local::now().naive_local();
        loop {
            self.step(&mut clock).await?;
        }
    }

    /// One redraw followed by the wait for the next one.
    ///
    /// The clock is read again after drawing so slow frames don't push the
    /// next tick past the second boundary.
    pub async fn step(&mut self, clock: &mut impl FnMut() -> NaiveDateTime) -> Result<()> {
        self.redraw(&clock())?;
        let drawn = clock();
        wait_for_redraw(&self.force, until_next_second(&drawn)).await;
        Ok(())
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }
}
