use lob_keymap::message::KeymapMessage;
use lob_session::{message::SessionMessage, model::FileId};

use crate::{
    action::Action,
    event::{Envelope, Message, MessageSource, Preview},
    model::Model,
};

mod command;
mod cursor;
pub mod session;

pub fn update_model(model: &mut Model, envelope: Envelope) -> Vec<Action> {
    if envelope.source == MessageSource::User {
        model.commandline = None;
    }

    envelope
        .messages
        .into_iter()
        .flat_map(|message| update_with_message(model, message))
        .collect()
}

#[tracing::instrument(skip(model))]
fn update_with_message(model: &mut Model, message: Message) -> Vec<Action> {
    match message {
        Message::Keymap(message) => update_with_keymap_message(model, &message),
        Message::Error(error) => {
            model.commandline = Some(error);
            Vec::new()
        }
        Message::PreviewLoaded(id, preview) => {
            preview_loaded(model, id, preview);
            Vec::new()
        }
        Message::Resize(x, y) => vec![Action::Resize(x, y)],
        Message::Session(message) => session::update(model, &message),
    }
}

fn update_with_keymap_message(model: &mut Model, message: &KeymapMessage) -> Vec<Action> {
    let session_message = match message {
        KeymapMessage::EnterCommand => {
            model.command = Some(String::new());
            return Vec::new();
        }
        KeymapMessage::InsertChar(c) => {
            if let Some(command) = model.command.as_mut() {
                command.push(*c);
            }
            return Vec::new();
        }
        KeymapMessage::DeleteChar => {
            if let Some(command) = model.command.as_mut() {
                command.pop();
            }
            return Vec::new();
        }
        KeymapMessage::LeaveCommand => {
            model.command = None;
            return Vec::new();
        }
        KeymapMessage::ExecuteCommand => {
            return match model.command.take() {
                Some(cmd) => command::execute(&cmd, model),
                None => Vec::new(),
            };
        }
        KeymapMessage::MoveCursor(direction) => {
            cursor::relocate(model, direction);
            return Vec::new();
        }
        KeymapMessage::Quit => return vec![Action::Quit],
        KeymapMessage::ClearRejected => SessionMessage::ClearRejected,
        KeymapMessage::StartAll => {
            if !model.session.can_start_all() {
                model.commandline = Some("No pending files".to_owned());
                return Vec::new();
            }
            SessionMessage::StartAll
        }
        KeymapMessage::Cancel
        | KeymapMessage::Pause
        | KeymapMessage::Remove
        | KeymapMessage::Resume
        | KeymapMessage::Retry
        | KeymapMessage::Start => {
            let id = match model.selected() {
                Some(selected) => selected.id.clone(),
                None => return Vec::new(),
            };

            match message {
                KeymapMessage::Cancel => SessionMessage::Cancel(id),
                KeymapMessage::Pause => SessionMessage::Pause(id),
                KeymapMessage::Remove => SessionMessage::Remove(id),
                KeymapMessage::Resume => SessionMessage::Resume(id),
                KeymapMessage::Retry => SessionMessage::Retry(id),
                _ => SessionMessage::Start(id),
            }
        }
    };

    session::update(model, &session_message)
}

fn preview_loaded(model: &mut Model, id: FileId, preview: Preview) {
    let wanted = model
        .session
        .get(&id)
        .is_some_and(|managed| managed.has_preview);

    if wanted {
        model.previews.insert(id, preview);
    } else {
        tracing::debug!("discarding preview of unmanaged file: {}", id);
    }
}
