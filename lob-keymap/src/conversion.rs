use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::key::{Key, KeyCode, KeyModifier};

pub fn to_key(event: &KeyEvent) -> Option<Key> {
    let mut modifier: Vec<_> = event
        .modifiers
        .iter_names()
        .flat_map(|(s, _)| to_modifier(s))
        .collect();

    match event.code {
        event::KeyCode::Backspace => resolve(event.kind, KeyCode::Backspace, modifier),
        event::KeyCode::Enter => resolve(event.kind, KeyCode::Enter, modifier),
        event::KeyCode::Left => resolve(event.kind, KeyCode::Left, modifier),
        event::KeyCode::Right => resolve(event.kind, KeyCode::Right, modifier),
        event::KeyCode::Up => resolve(event.kind, KeyCode::Up, modifier),
        event::KeyCode::Down => resolve(event.kind, KeyCode::Down, modifier),
        event::KeyCode::Home => resolve(event.kind, KeyCode::Home, modifier),
        event::KeyCode::End => resolve(event.kind, KeyCode::End, modifier),
        event::KeyCode::PageUp => resolve(event.kind, KeyCode::PageUp, modifier),
        event::KeyCode::PageDown => resolve(event.kind, KeyCode::PageDown, modifier),
        event::KeyCode::Tab => resolve(event.kind, KeyCode::Tab, modifier),
        event::KeyCode::Delete => resolve(event.kind, KeyCode::Delete, modifier),
        event::KeyCode::Char(c) => {
            // some terminals report upper case chars without the shift flag
            if c.is_ascii_uppercase() && !modifier.contains(&KeyModifier::Shift) {
                modifier.push(KeyModifier::Shift);
            }
            // shifted symbols like ':' already carry the shift in the char
            if !c.is_alphabetic() {
                modifier.retain(|modifier| *modifier != KeyModifier::Shift);
            }
            resolve(event.kind, KeyCode::from_char(c), modifier)
        }
        event::KeyCode::Esc => resolve(event.kind, KeyCode::Esc, modifier),
        _ => None,
    }
}

fn resolve(kind: KeyEventKind, code: KeyCode, modifier: Vec<KeyModifier>) -> Option<Key> {
    if kind != KeyEventKind::Press {
        return None;
    }

    Some(Key::new(code, modifier))
}

fn to_modifier(modifier: &str) -> Option<KeyModifier> {
    match modifier {
        "ALT" => Some(KeyModifier::Alt),
        "CONTROL" => Some(KeyModifier::Ctrl),
        "HYPER" => Some(KeyModifier::Command),
        "META" => Some(KeyModifier::Alt),
        "SHIFT" => Some(KeyModifier::Shift),
        "SUPER" => Some(KeyModifier::Command),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn event(code: event::KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn to_key_ignores_release() {
        let result = to_key(&event(
            event::KeyCode::Char('j'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));

        assert_eq!(None, result);
    }

    #[test]
    fn to_key_maps_control() {
        let result = to_key(&event(
            event::KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        ));

        assert_eq!(
            Some(Key::new(KeyCode::Char('c'), vec![KeyModifier::Ctrl])),
            result
        );
    }

    #[test]
    fn to_key_adds_shift_for_upper_case_chars() {
        let without_flag = to_key(&event(
            event::KeyCode::Char('S'),
            KeyModifiers::NONE,
            KeyEventKind::Press,
        ));
        let with_flag = to_key(&event(
            event::KeyCode::Char('S'),
            KeyModifiers::SHIFT,
            KeyEventKind::Press,
        ));

        let expected = Some(Key::new(KeyCode::Char('s'), vec![KeyModifier::Shift]));
        assert_eq!(expected, without_flag);
        assert_eq!(expected, with_flag);
    }

    #[test]
    fn to_key_drops_shift_of_symbols() {
        let result = to_key(&event(
            event::KeyCode::Char(':'),
            KeyModifiers::SHIFT,
            KeyEventKind::Press,
        ));

        assert_eq!(Some(Key::new(KeyCode::Char(':'), vec![])), result);
    }
}
