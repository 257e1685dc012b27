//! Force-update signal from the input side to the render loop.

use std::sync::Arc;

use tokio::sync::Notify;

/// Single-slot "redraw now" notification.
///
/// Signals sent while the render loop is busy coalesce into one stored
/// permit, so the loop redraws once using the latest state.
#[derive(Debug, Clone, Default)]
pub struct ForceUpdate {
    notify: Arc<Notify>,
}

impl ForceUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) {
        self.notify.notify_one();
    }

    /// Wait for the next signal (or consume a pending one).
    pub async fn wait(&self) {
        self.notify.notified().await;
    }
}
