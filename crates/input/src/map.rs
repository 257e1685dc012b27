//! Key mapping from terminal events to clock actions.

use crate::types::{ClockAction, Size};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal event to a clock action.
///
/// Key releases are ignored; presses and auto-repeats both count.
pub fn map_event(event: &Event) -> Option<ClockAction> {
    match event {
        Event::Resize(width, height) => Some(ClockAction::Resize(Size::new(*width, *height))),
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(*key),
        _ => None,
    }
}

/// Map keyboard input to clock actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ClockAction> {
    if should_quit(key) {
        return Some(ClockAction::Quit);
    }

    match key.code {
        // Toggles
        KeyCode::Char('t') | KeyCode::Char('T') => Some(ClockAction::ToggleTwelveHour),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(ClockAction::ToggleSeconds),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(ClockAction::ToggleCenter),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(ClockAction::ToggleDate),

        // Movement
        KeyCode::Down => Some(ClockAction::NudgeDown),
        KeyCode::Char('h') => Some(ClockAction::MoveLeft),
        KeyCode::Char('j') => Some(ClockAction::MoveDown),
        KeyCode::Char('k') => Some(ClockAction::MoveUp),
        KeyCode::Char('l') => Some(ClockAction::MoveRight),

        _ => None,
    }
}

/// Check if key should quit the clock.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_toggle_keys() {
        for (ch, action) in [
            ('t', ClockAction::ToggleTwelveHour),
            ('T', ClockAction::ToggleTwelveHour),
            ('s', ClockAction::ToggleSeconds),
            ('S', ClockAction::ToggleSeconds),
            ('c', ClockAction::ToggleCenter),
            ('C', ClockAction::ToggleCenter),
            ('d', ClockAction::ToggleDate),
        ] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(ch))),
                Some(action)
            );
        }
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(ClockAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(ClockAction::MoveDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(ClockAction::MoveUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('l'))),
            Some(ClockAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(ClockAction::NudgeDown)
        );

        // vi keys are lowercase only.
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('H'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_resize_event() {
        assert_eq!(
            map_event(&Event::Resize(100, 30)),
            Some(ClockAction::Resize(Size::new(100, 30)))
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('s'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_event(&Event::Key(release)), None);
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::Char('s')))),
            Some(ClockAction::ToggleSeconds)
        );
    }

    #[test]
    fn test_other_events_are_ignored() {
        assert_eq!(map_event(&Event::FocusGained), None);
    }
}
