use lob_keymap::{
    key::{Key, KeyCode, KeyModifier},
    message::{CursorDirection, KeymapMessage, Mode},
    MessageResolver,
};

#[test]
fn add_and_resolve_key_navigation() {
    let mut resolver = MessageResolver::default();

    assert_eq!(
        Some(KeymapMessage::MoveCursor(CursorDirection::Down)),
        resolver.add_key(Key::new(KeyCode::from_char('j'), vec![]))
    );
    assert_eq!(
        Some(KeymapMessage::MoveCursor(CursorDirection::Down)),
        resolver.add_key(Key::new(KeyCode::Down, vec![]))
    );
    assert_eq!(
        Some(KeymapMessage::MoveCursor(CursorDirection::Up)),
        resolver.add_key(Key::new(KeyCode::from_char('k'), vec![]))
    );
    assert_eq!(
        Some(KeymapMessage::MoveCursor(CursorDirection::Up)),
        resolver.add_key(Key::new(KeyCode::Up, vec![]))
    );
}

#[test]
fn add_and_resolve_key_shift_distinguishes_bindings() {
    let mut resolver = MessageResolver::default();

    assert_eq!(
        Some(KeymapMessage::Resume),
        resolver.add_key(Key::new(KeyCode::from_char('r'), vec![]))
    );
    assert_eq!(
        Some(KeymapMessage::Retry),
        resolver.add_key(Key::new(KeyCode::from_char('r'), vec![KeyModifier::Shift]))
    );
    assert_eq!(
        Some(KeymapMessage::Start),
        resolver.add_key(Key::new(KeyCode::from_char('s'), vec![]))
    );
    assert_eq!(
        Some(KeymapMessage::StartAll),
        resolver.add_key(Key::new(KeyCode::from_char('s'), vec![KeyModifier::Shift]))
    );
}

#[test]
fn add_and_resolve_key_quit() {
    let mut resolver = MessageResolver::default();

    assert_eq!(
        Some(KeymapMessage::Quit),
        resolver.add_key(Key::new(KeyCode::from_char('q'), vec![]))
    );
    assert_eq!(
        Some(KeymapMessage::Quit),
        resolver.add_key(Key::new(KeyCode::from_char('c'), vec![KeyModifier::Ctrl]))
    );
}

#[test]
fn add_and_resolve_key_unbound() {
    let mut resolver = MessageResolver::default();

    assert_eq!(
        None,
        resolver.add_key(Key::new(KeyCode::from_char('z'), vec![]))
    );
    assert_eq!(
        None,
        resolver.add_key(Key::new(KeyCode::from_char('c'), vec![]))
    );
}

#[test]
fn add_and_resolve_key_sequence_in_order() {
    let mut resolver = MessageResolver::default();
    let messages = ["p", "x", "d", "C", "z"]
        .iter()
        .filter_map(|keycode| Key::from_keycode_string(keycode))
        .filter_map(|key| resolver.add_key(key))
        .collect::<Vec<_>>();

    assert_eq!(
        vec![
            KeymapMessage::Pause,
            KeymapMessage::Cancel,
            KeymapMessage::Remove,
            KeymapMessage::ClearRejected,
        ],
        messages
    );
}

#[test]
fn add_and_resolve_key_command_mode_inserts_text() {
    let mut resolver = MessageResolver::default();

    assert_eq!(
        Some(KeymapMessage::EnterCommand),
        resolver.add_key(Key::new(KeyCode::from_char(':'), vec![]))
    );
    assert_eq!(Mode::Command, resolver.mode);

    assert_eq!(
        Some(KeymapMessage::InsertChar('q')),
        resolver.add_key(Key::new(KeyCode::from_char('q'), vec![]))
    );
    assert_eq!(
        Some(KeymapMessage::InsertChar('R')),
        resolver.add_key(Key::new(KeyCode::from_char('r'), vec![KeyModifier::Shift]))
    );
    assert_eq!(
        Some(KeymapMessage::InsertChar(' ')),
        resolver.add_key(Key::new(KeyCode::Space, vec![]))
    );
    assert_eq!(
        Some(KeymapMessage::DeleteChar),
        resolver.add_key(Key::new(KeyCode::Backspace, vec![]))
    );
    assert_eq!(
        None,
        resolver.add_key(Key::new(KeyCode::from_char('x'), vec![KeyModifier::Alt]))
    );
    assert_eq!(Mode::Command, resolver.mode);

    assert_eq!(
        Some(KeymapMessage::ExecuteCommand),
        resolver.add_key(Key::new(KeyCode::Enter, vec![]))
    );
    assert_eq!(Mode::Navigation, resolver.mode);
    assert_eq!(
        Some(KeymapMessage::Quit),
        resolver.add_key(Key::new(KeyCode::from_char('q'), vec![]))
    );
}

#[test]
fn add_and_resolve_key_command_mode_leaves_on_esc_and_ctrl_c() {
    let mut resolver = MessageResolver::default();

    for leave in [
        Key::new(KeyCode::Esc, vec![]),
        Key::new(KeyCode::from_char('c'), vec![KeyModifier::Ctrl]),
    ] {
        resolver.add_key(Key::new(KeyCode::from_char(':'), vec![]));
        assert_eq!(Some(KeymapMessage::LeaveCommand), resolver.add_key(leave));
        assert_eq!(Mode::Navigation, resolver.mode);
    }
}

#[test]
fn bindings_are_sorted_and_complete() {
    let resolver = MessageResolver::default();
    let bindings = resolver.bindings();

    assert_eq!(15, bindings.len());

    let keys = bindings.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(sorted, keys);
}
