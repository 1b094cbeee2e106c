use key::{Key, KeyCode, KeyModifier};
use map::KeyMap;
use message::{KeymapMessage, Mode};

pub mod conversion;
pub mod key;
mod map;
pub mod message;

#[derive(Debug, thiserror::Error, PartialEq)]
enum KeyMapError {
    #[error("Key {0} is mapped already.")]
    KeyAlreadyMapped(String),
    #[error("Failed to resolve key {0}.")]
    KeyUnresolvable(String),
}

#[derive(Debug, Default)]
pub struct MessageResolver {
    map: KeyMap,
    pub mode: Mode,
}

impl MessageResolver {
    /// Resolves `key` for the current mode. Entering and leaving the command
    /// line switches the mode, so follow up keys resolve as text.
    #[tracing::instrument(skip(self))]
    pub fn add_key(&mut self, key: Key) -> Option<KeymapMessage> {
        let message = match self.mode {
            Mode::Command => resolve_command_key(&key),
            Mode::Navigation => self.map.get(&key).cloned(),
        };

        match &message {
            Some(KeymapMessage::EnterCommand) => self.mode = Mode::Command,
            Some(KeymapMessage::ExecuteCommand | KeymapMessage::LeaveCommand) => {
                self.mode = Mode::Navigation
            }
            Some(_) => (),
            None => tracing::trace!("no binding for key {} in mode {:?}", key, self.mode),
        }

        message
    }

    pub fn bindings(&self) -> Vec<(String, &KeymapMessage)> {
        self.map.bindings()
    }
}

fn resolve_command_key(key: &Key) -> Option<KeymapMessage> {
    let is_ctrl = key.modifiers.contains(&KeyModifier::Ctrl);
    match key.code {
        KeyCode::Char('c') if is_ctrl => Some(KeymapMessage::LeaveCommand),
        _ if is_ctrl || key.modifiers.contains(&KeyModifier::Alt) => None,
        KeyCode::Esc => Some(KeymapMessage::LeaveCommand),
        KeyCode::Enter => Some(KeymapMessage::ExecuteCommand),
        KeyCode::Backspace => Some(KeymapMessage::DeleteChar),
        KeyCode::Space => Some(KeymapMessage::InsertChar(' ')),
        KeyCode::Char(c) if key.modifiers.contains(&KeyModifier::Shift) => {
            Some(KeymapMessage::InsertChar(c.to_ascii_uppercase()))
        }
        KeyCode::Char(c) => Some(KeymapMessage::InsertChar(c)),
        _ => None,
    }
}
