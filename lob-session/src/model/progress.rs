use std::fmt::Display;

use super::FileId;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum UploadStatus {
    #[default]
    Pending,
    Uploading,
    Paused,
    Completed,
    Error,
}

impl Display for UploadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadStatus::Pending => write!(f, "pending"),
            UploadStatus::Uploading => write!(f, "uploading"),
            UploadStatus::Paused => write!(f, "paused"),
            UploadStatus::Completed => write!(f, "completed"),
            UploadStatus::Error => write!(f, "error"),
        }
    }
}

/// Upload bookkeeping for one managed file. `bytes_uploaded` always equals
/// `total_bytes * percentage / 100` rounded.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressRecord {
    pub file_id: FileId,
    pub bytes_uploaded: u64,
    pub total_bytes: u64,
    pub percentage: f64,
    pub speed: f64,
    pub estimated_time_remaining: f64,
    pub status: UploadStatus,
    pub error_message: Option<String>,
}

impl ProgressRecord {
    pub fn new(file_id: FileId, total_bytes: u64) -> Self {
        Self {
            file_id,
            bytes_uploaded: 0,
            total_bytes,
            percentage: 0.0,
            speed: 0.0,
            estimated_time_remaining: 0.0,
            status: UploadStatus::Pending,
            error_message: None,
        }
    }

    pub fn remaining_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.bytes_uploaded)
    }
}
