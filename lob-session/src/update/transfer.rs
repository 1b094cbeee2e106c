use crate::{
    message::{SessionResult, Throughput, TransferReport},
    model::{FileId, ManagedFile, Session, UploadStatus},
};

pub fn progressed(session: &mut Session, report: &TransferReport<Throughput>) -> Vec<SessionResult> {
    let Some(managed) = active(session, &report.id, report.transfer) else {
        return Vec::new();
    };

    let progress = &mut managed.progress;
    let total = progress.total_bytes;
    let percentage = if total == 0 {
        100.0
    } else {
        (report.content.bytes_uploaded as f64 * 100.0 / total as f64).min(100.0)
    };

    if percentage >= 100.0 {
        progress.percentage = 100.0;
        progress.bytes_uploaded = total;
        progress.speed = 0.0;
        progress.estimated_time_remaining = 0.0;
        progress.status = UploadStatus::Completed;

        tracing::info!("upload completed: {}", managed.id);

        return vec![SessionResult::TransferStopped(managed.id.clone())];
    }

    progress.percentage = percentage;
    progress.bytes_uploaded = (total as f64 * percentage / 100.0).round() as u64;
    progress.speed = report.content.speed.max(0.0);
    progress.estimated_time_remaining = if progress.speed > 0.0 {
        progress.remaining_bytes() as f64 / progress.speed
    } else {
        0.0
    };

    Vec::new()
}

pub fn failed(session: &mut Session, report: &TransferReport<String>) -> Vec<SessionResult> {
    let Some(managed) = active(session, &report.id, report.transfer) else {
        return Vec::new();
    };

    let progress = &mut managed.progress;
    progress.status = UploadStatus::Error;
    progress.error_message = Some(report.content.clone());
    progress.speed = 0.0;
    progress.estimated_time_remaining = 0.0;

    tracing::warn!("upload failed for {}: {}", managed.id, report.content);

    vec![SessionResult::TransferStopped(managed.id.clone())]
}

fn active<'a>(session: &'a mut Session, id: &FileId, transfer: u32) -> Option<&'a mut ManagedFile> {
    match session.get_mut(id) {
        Some(managed) if managed.transfer == transfer && managed.status() == UploadStatus::Uploading => {
            Some(managed)
        }
        Some(managed) => {
            tracing::trace!(
                "stale report for {} dropped: transfer {} (current {}) in state {}",
                id,
                transfer,
                managed.transfer,
                managed.status()
            );
            None
        }
        None => {
            tracing::trace!("report for unknown file dropped: {}", id);
            None
        }
    }
}
