use lob_session::model::FileId;

use crate::{error::AppError, event::Emitter, task::Task, terminal::TerminalWrapper};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    AbortTransfer(FileId),
    Quit,
    Resize(u16, u16),
    Task(Task),
}

#[derive(Debug, Eq, PartialEq)]
pub enum ActionResult {
    Normal,
    Quit,
}

#[tracing::instrument(skip(emitter, terminal))]
pub fn exec(
    emitter: &mut Emitter,
    terminal: &mut TerminalWrapper,
    actions: Vec<Action>,
) -> Result<ActionResult, AppError> {
    let mut result = ActionResult::Normal;
    for action in actions {
        match action {
            Action::AbortTransfer(id) => emitter.abort(&id),
            Action::Quit => result = ActionResult::Quit,
            Action::Resize(x, y) => terminal.resize(x, y)?,
            Action::Task(task) => emitter.run(task),
        }
    }

    Ok(result)
}
