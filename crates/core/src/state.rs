//! Option/position state shared by the input handler and the render loop.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::color::resolve_color_index;
use crate::position::{clamp_offset, max_x, max_y, resolve_origin};
use crate::types::{ClockAction, Origin, Size, DEFAULT_COLOR_INDEX, FRAME_HEIGHT};

/// Shared handle to the clock state.
///
/// Every read and write goes through the lock. Guards must not be held
/// across an `.await`.
pub type SharedState = Arc<RwLock<ClockState>>;

/// Outcome of applying a [`ClockAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// State may have changed; the display should be redrawn.
    Redraw,
    /// The action was rejected (e.g. manual move while centered).
    Ignored,
    /// The program should exit.
    Quit,
}

/// Flags and geometry that drive one clock frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    pub seconds: bool,
    pub center: bool,
    pub twelve_hour: bool,
    pub show_date: bool,
    pub color_index: u16,
    /// Manual offset, used when not centering.
    pub offset: Origin,
    /// Last-known terminal size.
    pub terminal: Size,
    /// Last-known display matrix size.
    pub display: Size,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            seconds: false,
            center: false,
            twelve_hour: false,
            show_date: true,
            color_index: DEFAULT_COLOR_INDEX,
            offset: Origin::default(),
            terminal: Size::new(80, 24),
            display: Size::new(0, FRAME_HEIGHT),
        }
    }
}

impl ClockState {
    pub fn new(terminal: Size) -> Self {
        Self {
            terminal,
            ..Self::default()
        }
    }

    pub fn with_seconds(mut self, seconds: bool) -> Self {
        self.seconds = seconds;
        self
    }

    pub fn with_center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    pub fn with_twelve_hour(mut self, twelve_hour: bool) -> Self {
        self.twelve_hour = twelve_hour;
        self
    }

    pub fn with_show_date(mut self, show_date: bool) -> Self {
        self.show_date = show_date;
        self
    }

    /// Set the color, clamping out-of-range indices to the default.
    pub fn with_color_index(mut self, requested: i64) -> Self {
        self.color_index = resolve_color_index(requested);
        self
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Apply one action.
    ///
    /// Manual moves are rejected while centering is on. `NudgeDown` is not
    /// bounds-checked here; the render loop clamps the offset afterwards.
    pub fn apply(&mut self, action: ClockAction) -> ApplyOutcome {
        if action.is_manual_move() && self.center {
            return ApplyOutcome::Ignored;
        }

        match action {
            ClockAction::Quit => return ApplyOutcome::Quit,
            ClockAction::ToggleTwelveHour => self.twelve_hour = !self.twelve_hour,
            ClockAction::ToggleSeconds => self.seconds = !self.seconds,
            ClockAction::ToggleCenter => self.center = !self.center,
            ClockAction::ToggleDate => self.show_date = !self.show_date,
            ClockAction::NudgeDown => self.offset.y = self.offset.y.saturating_add(1),
            ClockAction::MoveLeft => {
                if self.offset.x == 0 {
                    return ApplyOutcome::Ignored;
                }
                self.offset.x -= 1;
            }
            ClockAction::MoveRight => {
                if self.offset.x >= max_x(self.terminal, self.display) {
                    return ApplyOutcome::Ignored;
                }
                self.offset.x += 1;
            }
            ClockAction::MoveUp => {
                if self.offset.y == 0 {
                    return ApplyOutcome::Ignored;
                }
                self.offset.y -= 1;
            }
            ClockAction::MoveDown => {
                if self.offset.y >= max_y(self.terminal, self.display, self.show_date) {
                    return ApplyOutcome::Ignored;
                }
                self.offset.y += 1;
            }
            ClockAction::Resize(size) => self.terminal = size,
        }

        ApplyOutcome::Redraw
    }

    /// Record the freshly built display size and resolve the origin.
    ///
    /// When not centering, the clamped origin is written back as the new
    /// manual offset.
    pub fn place(&mut self, display: Size) -> Origin {
        self.display = display;
        let origin = resolve_origin(
            self.terminal,
            display,
            self.center,
            self.offset,
            self.show_date,
        );
        if !self.center {
            self.offset = clamp_offset(self.terminal, display, self.offset, self.show_date);
        }
        origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DisplayMatrix;

    fn placed(center: bool) -> ClockState {
        let mut s = ClockState::new(Size::new(80, 24)).with_center(center);
        s.place(DisplayMatrix::build("12:30").size());
        s
    }

    #[test]
    fn toggles_flip_flags() {
        let mut s = ClockState::default();
        assert_eq!(s.apply(ClockAction::ToggleSeconds), ApplyOutcome::Redraw);
        assert!(s.seconds);
        s.apply(ClockAction::ToggleTwelveHour);
        assert!(s.twelve_hour);
        s.apply(ClockAction::ToggleCenter);
        assert!(s.center);
        s.apply(ClockAction::ToggleDate);
        assert!(!s.show_date);
        s.apply(ClockAction::ToggleSeconds);
        assert!(!s.seconds);
    }

    #[test]
    fn quit_does_not_touch_state() {
        let mut s = placed(false);
        let before = s.clone();
        assert_eq!(s.apply(ClockAction::Quit), ApplyOutcome::Quit);
        assert_eq!(s, before);
    }

    #[test]
    fn manual_moves_are_noops_while_centered() {
        let mut s = placed(true);
        let before = s.clone();
        for a in [
            ClockAction::MoveLeft,
            ClockAction::MoveDown,
            ClockAction::MoveUp,
            ClockAction::MoveRight,
        ] {
            assert_eq!(s.apply(a), ApplyOutcome::Ignored);
        }
        assert_eq!(s, before);
    }

    #[test]
    fn manual_moves_respect_bounds() {
        let mut s = placed(false);
        assert_eq!(s.apply(ClockAction::MoveLeft), ApplyOutcome::Ignored);
        assert_eq!(s.apply(ClockAction::MoveUp), ApplyOutcome::Ignored);

        assert_eq!(s.apply(ClockAction::MoveRight), ApplyOutcome::Redraw);
        assert_eq!(s.apply(ClockAction::MoveDown), ApplyOutcome::Redraw);
        assert_eq!(s.offset, Origin::new(1, 1));

        s.offset = Origin::new(80 - 32, 24 - 7 - 1);
        assert_eq!(s.apply(ClockAction::MoveRight), ApplyOutcome::Ignored);
        assert_eq!(s.apply(ClockAction::MoveDown), ApplyOutcome::Ignored);
    }

    #[test]
    fn hidden_date_allows_moving_one_row_lower() {
        let mut s = ClockState::new(Size::new(80, 8)).with_show_date(false);
        s.place(DisplayMatrix::build("12:30").size());
        assert_eq!(s.apply(ClockAction::MoveDown), ApplyOutcome::Redraw);
        assert_eq!(s.offset.y, 1);
        assert_eq!(s.apply(ClockAction::MoveDown), ApplyOutcome::Ignored);

        // Showing the date again pulls the clock back up on the next frame.
        s.apply(ClockAction::ToggleDate);
        let origin = s.place(DisplayMatrix::build("12:30").size());
        assert_eq!(origin.y, 0);
    }

    #[test]
    fn nudge_down_is_unconditional() {
        let mut s = placed(true);
        assert_eq!(s.apply(ClockAction::NudgeDown), ApplyOutcome::Redraw);
        assert_eq!(s.offset.y, 1);
    }

    #[test]
    fn resize_updates_terminal_size() {
        let mut s = ClockState::default();
        assert_eq!(
            s.apply(ClockAction::Resize(Size::new(120, 40))),
            ApplyOutcome::Redraw
        );
        assert_eq!(s.terminal, Size::new(120, 40));
    }

    #[test]
    fn place_clamps_manual_offset_after_shrink() {
        let mut s = placed(false);
        s.offset = Origin::new(40, 15);
        s.apply(ClockAction::Resize(Size::new(40, 12)));
        let origin = s.place(Size::new(32, FRAME_HEIGHT));
        assert_eq!(origin, Origin::new(8, 4));
        assert_eq!(s.offset, origin);
    }

    #[test]
    fn place_leaves_offset_alone_while_centered() {
        let mut s = ClockState::new(Size::new(80, 24)).with_center(true);
        s.offset = Origin::new(3, 2);
        let origin = s.place(Size::new(32, FRAME_HEIGHT));
        assert_eq!(origin, Origin::new(23, 8));
        assert_eq!(s.offset, Origin::new(3, 2));
    }

    #[test]
    fn color_index_is_clamped() {
        assert_eq!(ClockState::default().with_color_index(999).color_index, 2);
        assert_eq!(ClockState::default().with_color_index(42).color_index, 42);
    }
}
