use std::sync::Arc;

use lob_file::{validation::RejectedEntry, CandidateFile};

use crate::model::FileId;

#[derive(Clone, Debug, PartialEq)]
pub enum SessionMessage {
    AddCandidates(Vec<CandidateFile>, Vec<RejectedEntry<CandidateFile>>),
    Cancel(FileId),
    ClearRejected,
    Pause(FileId),
    Remove(FileId),
    Resume(FileId),
    Retry(FileId),
    Start(FileId),
    StartAll,
    TransferFailed(TransferReport<String>),
    TransferProgressed(TransferReport<Throughput>),
}

/// Report of a running transfer. `transfer` identifies the start that spawned
/// it, reports of an older start are dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferReport<T> {
    pub id: FileId,
    pub transfer: u32,
    pub content: T,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throughput {
    pub bytes_uploaded: u64,
    pub speed: f64,
}

/// Side effects the host has to carry out after an update.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionResult {
    FilesAccepted(Vec<FileId>),
    PreviewReleased(FileId),
    PreviewRequested(FileId, Arc<CandidateFile>),
    TransferRequested(TransferRequest),
    TransferStopped(FileId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransferRequest {
    pub id: FileId,
    pub file: Arc<CandidateFile>,
    pub offset: u64,
    pub transfer: u32,
}
