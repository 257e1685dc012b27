//! Input handler: applies terminal events to the shared clock state.
//!
//! Runs on its own thread, blocking on `crossterm::event::read`. Every
//! mutation happens under the write lock; the force-update signal is sent
//! only after the guard is released.

use std::thread;

use anyhow::Result;
use crossterm::event::{self, Event};
use tokio::sync::oneshot;

use crate::core::{ApplyOutcome, ForceUpdate, SharedState};
use crate::map::map_event;

pub struct InputHandler {
    state: SharedState,
    force: ForceUpdate,
}

impl InputHandler {
    pub fn new(state: SharedState, force: ForceUpdate) -> Self {
        Self { state, force }
    }

    /// Apply one event. Returns `None` for events with no mapping.
    pub fn handle_event(&self, event: &Event) -> Option<ApplyOutcome> {
        let action = map_event(event)?;
        let outcome = self.state.write().apply(action);
        if outcome == ApplyOutcome::Redraw {
            self.force.signal();
        }
        log::debug!("input {} -> {:?}", action.as_str(), outcome);
        Some(outcome)
    }

    /// Read events until a quit key arrives or the event source fails.
    pub fn run(&self) -> Result<()> {
        loop {
            let event = event::read()?;
            if self.handle_event(&event) == Some(ApplyOutcome::Quit) {
                return Ok(());
            }
        }
    }

    /// Start the handler on a detached thread.
    ///
    /// `quit` fires when the handler stops, whether on a quit key or on a
    /// read error.
    pub fn spawn(self, quit: oneshot::Sender<()>) -> Result<()> {
        thread::Builder::new()
            .name("tui-clock-input".into())
            .spawn(move || {
                if let Err(e) = self.run() {
                    log::error!("input thread stopped: {e:#}");
                }
                let _ = quit.send(());
            })?;
        Ok(())
    }
}
