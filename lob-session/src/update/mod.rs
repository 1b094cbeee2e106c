use crate::{
    message::{SessionMessage, SessionResult},
    model::Session,
};

mod batch;
pub mod lifecycle;
mod transfer;

#[tracing::instrument(skip(session))]
pub fn update(session: &mut Session, message: &SessionMessage) -> Vec<SessionResult> {
    match message {
        SessionMessage::AddCandidates(candidates, rejections) => {
            batch::add(session, candidates, rejections)
        }
        SessionMessage::Cancel(id) | SessionMessage::Remove(id) => lifecycle::remove(session, id),
        SessionMessage::ClearRejected => batch::clear_rejected(session),
        SessionMessage::Pause(id) => lifecycle::pause(session, id),
        SessionMessage::Resume(id) => lifecycle::resume(session, id),
        SessionMessage::Retry(id) => lifecycle::retry(session, id),
        SessionMessage::Start(id) => lifecycle::start(session, id),
        SessionMessage::StartAll => lifecycle::start_all(session),
        SessionMessage::TransferFailed(report) => transfer::failed(session, report),
        SessionMessage::TransferProgressed(report) => transfer::progressed(session, report),
    }
}
