use thiserror::Error;

use crate::event::Envelope;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sending message failed")]
    ActionSendFailed(#[from] tokio::sync::mpsc::error::SendError<Envelope>),
    #[error("Error aggregation")]
    Aggregate(Vec<AppError>),
    #[error("File operation failed")]
    FileOperationFailed(#[from] std::io::Error),
    #[error("Loading image failed")]
    ImageOperationFailed(#[from] image::ImageError),
    #[error("Task did not finish")]
    TaskJoinFailed(#[from] tokio::task::JoinError),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
    #[error("{0}")]
    TransferRejected(String),
}
