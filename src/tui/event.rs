use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::input::Key;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Key(Key),
    Resize,
}

/// Block until the terminal delivers something we care about.
///
/// Returns `Ok(None)` for events with no meaning here (mouse, focus, key
/// releases, unmapped keys).
pub fn next_event() -> std::io::Result<Option<TuiEvent>> {
    match event::read()? {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Ok(translate_key(key_event).map(TuiEvent::Key))
        }
        Event::Resize(_, _) => Ok(Some(TuiEvent::Resize)),
        _ => Ok(None),
    }
}

/// Map a crossterm key press to a backend-neutral key token.
pub fn translate_key(key_event: KeyEvent) -> Option<Key> {
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Key::Interrupt),
        // Other Ctrl/Alt chords carry no meaning
        (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (_, KeyCode::Char(c)) => Some(Key::Char(c)),
        (_, KeyCode::Enter) => Some(Key::Enter),
        (_, KeyCode::Up) => Some(Key::Up),
        (_, KeyCode::Down) => Some(Key::Down),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let key = translate_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(key, Some(Key::Interrupt));
    }

    #[test]
    fn test_plain_and_shifted_chars_pass_through() {
        assert_eq!(
            translate_key(press(KeyCode::Char('n'), KeyModifiers::NONE)),
            Some(Key::Char('n'))
        );
        assert_eq!(
            translate_key(press(KeyCode::Char('N'), KeyModifiers::SHIFT)),
            Some(Key::Char('N'))
        );
        assert_eq!(
            translate_key(press(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Key::Char(' '))
        );
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(translate_key(press(KeyCode::Enter, KeyModifiers::NONE)), Some(Key::Enter));
        assert_eq!(translate_key(press(KeyCode::Up, KeyModifiers::NONE)), Some(Key::Up));
        assert_eq!(translate_key(press(KeyCode::Down, KeyModifiers::NONE)), Some(Key::Down));
    }

    #[test]
    fn test_unmapped_keys_are_dropped() {
        assert_eq!(translate_key(press(KeyCode::Char('q'), KeyModifiers::CONTROL)), None);
        assert_eq!(translate_key(press(KeyCode::Char('n'), KeyModifiers::ALT)), None);
        assert_eq!(translate_key(press(KeyCode::Esc, KeyModifiers::NONE)), None);
        assert_eq!(translate_key(press(KeyCode::Tab, KeyModifiers::NONE)), None);
    }
}
