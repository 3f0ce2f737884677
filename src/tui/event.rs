use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::io;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Presenter actions (passed to core::update)
    Advance,
    Retreat,
    First,
    Last,
    ToggleFullscreen,
    Quit,

    // TUI-local events (handled directly in TUI)
    ScrollUp,
    ScrollDown,
    Click(u16, u16),
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::Click(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

/// Translate a key press into a presenter event.
///
/// Only presses count: terminals that report releases would otherwise
/// advance twice per keystroke.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Right) | (_, KeyCode::Char(' ')) => Some(TuiEvent::Advance),
        (_, KeyCode::Left) => Some(TuiEvent::Retreat),
        (_, KeyCode::Char('f')) => Some(TuiEvent::ToggleFullscreen),
        (_, KeyCode::Home) => Some(TuiEvent::First),
        (_, KeyCode::End) => Some(TuiEvent::Last),
        (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
        (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(press(KeyCode::Right)), Some(TuiEvent::Advance));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(TuiEvent::Advance));
        assert_eq!(map_key(press(KeyCode::Left)), Some(TuiEvent::Retreat));
        assert_eq!(map_key(press(KeyCode::Home)), Some(TuiEvent::First));
        assert_eq!(map_key(press(KeyCode::End)), Some(TuiEvent::Last));
    }

    #[test]
    fn test_fullscreen_key_is_lowercase_f_only() {
        assert_eq!(map_key(press(KeyCode::Char('f'))), Some(TuiEvent::ToggleFullscreen));
        assert_eq!(map_key(press(KeyCode::Char('F'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(TuiEvent::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
        assert_eq!(map_key(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(map_key(press(KeyCode::Enter)), None);
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
    }
}
