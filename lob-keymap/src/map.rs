use std::collections::HashMap;

use crate::{
    key::Key,
    message::{CursorDirection, KeymapMessage},
    KeyMapError,
};

#[derive(Debug)]
pub struct KeyMap {
    mappings: HashMap<Key, KeymapMessage>,
}

impl KeyMap {
    pub fn get(&self, key: &Key) -> Option<&KeymapMessage> {
        self.mappings.get(key)
    }

    /// Bindings sorted by their keycode, used to render the help line.
    pub fn bindings(&self) -> Vec<(String, &KeymapMessage)> {
        let mut bindings = self
            .mappings
            .iter()
            .map(|(key, message)| (key.to_string(), message))
            .collect::<Vec<_>>();

        bindings.sort_by(|(a, _), (b, _)| a.cmp(b));
        bindings
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut mappings = HashMap::new();

        for (keycode, message) in [
            ("j", KeymapMessage::MoveCursor(CursorDirection::Down)),
            ("<down>", KeymapMessage::MoveCursor(CursorDirection::Down)),
            ("k", KeymapMessage::MoveCursor(CursorDirection::Up)),
            ("<up>", KeymapMessage::MoveCursor(CursorDirection::Up)),
            ("s", KeymapMessage::Start),
            ("p", KeymapMessage::Pause),
            ("r", KeymapMessage::Resume),
            ("R", KeymapMessage::Retry),
            ("x", KeymapMessage::Cancel),
            ("d", KeymapMessage::Remove),
            ("S", KeymapMessage::StartAll),
            ("C", KeymapMessage::ClearRejected),
            (":", KeymapMessage::EnterCommand),
            ("q", KeymapMessage::Quit),
            ("<C-c>", KeymapMessage::Quit),
        ] {
            if let Err(error) = add_mapping(&mut mappings, keycode, message) {
                tracing::warn!("skipping binding: {}", error);
            }
        }

        Self { mappings }
    }
}

fn add_mapping(
    mappings: &mut HashMap<Key, KeymapMessage>,
    keycode: &str,
    message: KeymapMessage,
) -> Result<(), KeyMapError> {
    let key = Key::from_keycode_string(keycode)
        .ok_or_else(|| KeyMapError::KeyUnresolvable(keycode.to_owned()))?;

    if mappings.contains_key(&key) {
        return Err(KeyMapError::KeyAlreadyMapped(keycode.to_owned()));
    }

    mappings.insert(key, message);
    Ok(())
}
