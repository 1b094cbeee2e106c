use lob_file::format;

use crate::model::{ProgressRecord, UploadStatus};

/// Text rendition of a progress record.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressView {
    pub fill: f64,
    pub percentage: String,
    pub status: &'static str,
    pub speed: Option<String>,
    pub eta: Option<String>,
}

pub fn present(progress: &ProgressRecord) -> ProgressView {
    let uploading = progress.status == UploadStatus::Uploading;

    let speed = if uploading && progress.speed > 0.0 {
        Some(format::format_speed(progress.speed))
    } else {
        None
    };

    let eta = if uploading && progress.estimated_time_remaining > 0.0 {
        Some(format::format_duration(progress.estimated_time_remaining))
    } else {
        None
    };

    ProgressView {
        fill: progress.percentage.clamp(0.0, 100.0),
        percentage: format!("{}%", progress.percentage.round()),
        status: status_text(progress.status),
        speed,
        eta,
    }
}

pub fn status_text(status: UploadStatus) -> &'static str {
    match status {
        UploadStatus::Pending => "Pending...",
        UploadStatus::Uploading => "Uploading...",
        UploadStatus::Paused => "Paused",
        UploadStatus::Completed => "Completed",
        UploadStatus::Error => "Error",
    }
}
