use message::{SessionMessage, SessionResult};
use model::Session;

pub mod message;
pub mod model;
mod update;
pub mod view;

pub fn update(session: &mut Session, message: &SessionMessage) -> Vec<SessionResult> {
    update::update(session, message)
}

pub fn shutdown(session: &mut Session) -> Vec<SessionResult> {
    update::lifecycle::shutdown(session)
}
