use lob_session::message::{SessionMessage, SessionResult};

use crate::{action::Action, model::Model, task::Task};

use super::cursor;

pub fn update(model: &mut Model, message: &SessionMessage) -> Vec<Action> {
    let results = lob_session::update(&mut model.session, message);
    cursor::clamp(model);

    // only the first batch starts on its own, even if nothing got accepted
    let start_on_accept = matches!(message, SessionMessage::AddCandidates(..))
        && std::mem::take(&mut model.settings.start_on_accept);

    let mut actions = apply(model, results);
    if start_on_accept && model.session.can_start_all() {
        actions.extend(update(model, &SessionMessage::StartAll));
    }

    actions
}

/// Turns session side effects into actions for the task layer.
pub fn apply(model: &mut Model, results: Vec<SessionResult>) -> Vec<Action> {
    let mut actions = Vec::new();
    for result in results {
        match result {
            SessionResult::FilesAccepted(ids) => {
                model.commandline = Some(format!("{} file(s) ready for upload", ids.len()));
            }
            SessionResult::PreviewReleased(id) => {
                if model.previews.remove(&id).is_some() {
                    tracing::debug!("preview released: {}", id);
                }
            }
            SessionResult::PreviewRequested(id, file) => {
                actions.push(Action::Task(Task::LoadPreview(id, file.path.clone())));
            }
            SessionResult::TransferRequested(request) => {
                actions.push(Action::Task(Task::Transfer(request)));
            }
            SessionResult::TransferStopped(id) => {
                actions.push(Action::AbortTransfer(id));
            }
        }
    }

    actions
}
