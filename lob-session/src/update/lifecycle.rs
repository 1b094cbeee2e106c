use crate::{
    message::{SessionResult, TransferRequest},
    model::{FileId, ManagedFile, Session, UploadStatus},
};

pub fn start(session: &mut Session, id: &FileId) -> Vec<SessionResult> {
    let Some(managed) = session.get_mut(id) else {
        tracing::warn!("start requested for unknown file: {}", id);
        return Vec::new();
    };

    match managed.status() {
        UploadStatus::Pending | UploadStatus::Paused => begin(managed),
        status => {
            tracing::debug!("start ignored for {} in state {}", id, status);
            Vec::new()
        }
    }
}

pub fn resume(session: &mut Session, id: &FileId) -> Vec<SessionResult> {
    let Some(managed) = session.get_mut(id) else {
        tracing::warn!("resume requested for unknown file: {}", id);
        return Vec::new();
    };

    match managed.status() {
        UploadStatus::Paused => begin(managed),
        status => {
            tracing::debug!("resume ignored for {} in state {}", id, status);
            Vec::new()
        }
    }
}

pub fn start_all(session: &mut Session) -> Vec<SessionResult> {
    let pending: Vec<_> = session
        .files
        .iter()
        .filter(|managed| managed.status() == UploadStatus::Pending)
        .map(|managed| managed.id.clone())
        .collect();

    pending.iter().flat_map(|id| start(session, id)).collect()
}

pub fn pause(session: &mut Session, id: &FileId) -> Vec<SessionResult> {
    let Some(managed) = session.get_mut(id) else {
        tracing::warn!("pause requested for unknown file: {}", id);
        return Vec::new();
    };

    if managed.status() != UploadStatus::Uploading {
        tracing::debug!("pause ignored for {} in state {}", id, managed.status());
        return Vec::new();
    }

    managed.progress.status = UploadStatus::Paused;

    tracing::debug!(
        "paused {} at {} bytes",
        id,
        managed.progress.bytes_uploaded
    );

    vec![SessionResult::TransferStopped(id.clone())]
}

pub fn retry(session: &mut Session, id: &FileId) -> Vec<SessionResult> {
    let Some(managed) = session.get_mut(id) else {
        tracing::warn!("retry requested for unknown file: {}", id);
        return Vec::new();
    };

    if managed.status() != UploadStatus::Error {
        tracing::debug!("retry ignored for {} in state {}", id, managed.status());
        return Vec::new();
    }

    let progress = &mut managed.progress;
    progress.status = UploadStatus::Pending;
    progress.bytes_uploaded = 0;
    progress.percentage = 0.0;
    progress.speed = 0.0;
    progress.estimated_time_remaining = 0.0;
    progress.error_message = None;

    Vec::new()
}

pub fn remove(session: &mut Session, id: &FileId) -> Vec<SessionResult> {
    match session.files.iter().position(|managed| &managed.id == id) {
        Some(index) => {
            let managed = session.files.remove(index);
            tracing::debug!("removed {} in state {}", id, managed.status());

            release(managed)
        }
        None => {
            tracing::warn!("remove requested for unknown file: {}", id);
            Vec::new()
        }
    }
}

pub fn shutdown(session: &mut Session) -> Vec<SessionResult> {
    session.rejected.clear();
    session.size_warning = None;
    session.files.drain(..).flat_map(release).collect()
}

/// Effects for a file leaving the session. Consumes the file, so a transfer
/// and a preview are released at most once.
pub fn release(managed: ManagedFile) -> Vec<SessionResult> {
    let mut results = Vec::new();
    if managed.status() == UploadStatus::Uploading {
        results.push(SessionResult::TransferStopped(managed.id.clone()));
    }

    if managed.has_preview {
        results.push(SessionResult::PreviewReleased(managed.id));
    }

    results
}

fn begin(managed: &mut ManagedFile) -> Vec<SessionResult> {
    managed.transfer += 1;
    managed.progress.status = UploadStatus::Uploading;

    tracing::debug!(
        "starting transfer {} for {} at offset {}",
        managed.transfer,
        managed.id,
        managed.progress.bytes_uploaded
    );

    vec![SessionResult::TransferRequested(TransferRequest {
        id: managed.id.clone(),
        file: managed.file.clone(),
        offset: managed.progress.bytes_uploaded,
        transfer: managed.transfer,
    })]
}
