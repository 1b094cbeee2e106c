use std::{collections::HashMap, path::PathBuf, time::Duration};

use lob_session::{
    message::{SessionMessage, TransferRequest},
    model::FileId,
};
use tokio::{sync::mpsc::Sender, task::JoinSet};
use tokio_util::sync::CancellationToken;

use crate::{
    error::AppError,
    event::{Envelope, Message, MessageSource, Preview},
};

use self::transport::SimulatedTransport;

mod picker;
mod preview;
pub mod transport;

#[derive(Clone, Debug, PartialEq)]
pub enum Task {
    LoadCandidates(Vec<PathBuf>, usize),
    LoadPreview(FileId, PathBuf),
    Transfer(TransferRequest),
}

pub struct TaskManager {
    failure_rate: f64,
    sender: Sender<Envelope>,
    tasks: JoinSet<Result<(), AppError>>,
    tick: Duration,
    transfers: HashMap<FileId, CancellationToken>,
}

impl TaskManager {
    pub fn new(sender: Sender<Envelope>, tick: Duration, failure_rate: f64) -> Self {
        Self {
            failure_rate,
            sender,
            tasks: JoinSet::new(),
            tick,
            transfers: HashMap::new(),
        }
    }

    /// Cancels the running transfer of `id`. Unknown ids are ignored.
    pub fn abort(&mut self, id: &FileId) {
        if let Some(token) = self.transfers.remove(id) {
            tracing::debug!("aborting transfer: {}", id);
            token.cancel();
        }
    }

    pub async fn finishing(&mut self) -> Result<(), AppError> {
        for (_, token) in self.transfers.drain() {
            token.cancel();
        }
        self.tasks.abort_all();

        let mut errors = Vec::new();
        while let Some(task) = self.tasks.join_next().await {
            if let Some(error) = collect(task) {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Aggregate(errors))
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn run(&mut self, task: Task) {
        self.reap();

        match task {
            Task::LoadCandidates(paths, max_files) => {
                let sender = self.sender.clone();
                self.tasks.spawn(async move {
                    let (candidates, rejected) = picker::pick(paths, max_files).await;
                    sender
                        .send(Envelope {
                            messages: vec![Message::Session(SessionMessage::AddCandidates(
                                candidates, rejected,
                            ))],
                            source: MessageSource::Task,
                        })
                        .await?;

                    Ok(())
                });
            }
            Task::LoadPreview(id, path) => {
                let sender = self.sender.clone();
                self.tasks.spawn(async move {
                    let preview = match preview::load(path).await {
                        Ok(it) => it,
                        Err(error) => {
                            emit_error(&sender, error).await;
                            Preview::None
                        }
                    };

                    sender
                        .send(Envelope {
                            messages: vec![Message::PreviewLoaded(id, preview)],
                            source: MessageSource::Task,
                        })
                        .await?;

                    Ok(())
                });
            }
            Task::Transfer(request) => {
                let token = CancellationToken::new();
                if let Some(previous) = self.transfers.insert(request.id.clone(), token.clone()) {
                    tracing::warn!("replacing running transfer: {}", request.id);
                    previous.cancel();
                }

                let transport = SimulatedTransport::new(self.tick, self.failure_rate);
                self.tasks.spawn(transport::run_transfer(
                    transport,
                    request,
                    token,
                    self.sender.clone(),
                ));
            }
        }
    }

    fn reap(&mut self) {
        while let Some(task) = self.tasks.try_join_next() {
            if let Some(error) = collect(task) {
                tracing::error!("task result returned error: {:?}", error);
            }
        }
    }
}

fn collect(task: Result<Result<(), AppError>, tokio::task::JoinError>) -> Option<AppError> {
    match task {
        Ok(Ok(())) => None,
        Ok(Err(error)) => {
            tracing::error!("task result returned error: {:?}", error);
            Some(error)
        }
        Err(error) if error.is_cancelled() => None,
        Err(error) => {
            tracing::error!("task failed: {:?}", error);
            Some(AppError::TaskJoinFailed(error))
        }
    }
}

async fn emit_error(sender: &Sender<Envelope>, error: AppError) {
    tracing::error!("task failed: {:?}", error);

    let _ = sender
        .send(Envelope {
            messages: vec![Message::Error(format!("Error: {}", error))],
            source: MessageSource::Task,
        })
        .await;
}

#[cfg(test)]
mod test {
    use std::{path::Path, sync::Arc, time::Duration};

    use lob_file::CandidateFile;
    use lob_session::{
        message::{SessionMessage, TransferRequest},
        model::FileId,
    };
    use tokio::sync::mpsc;

    use crate::event::{Message, Preview};

    use super::{Task, TaskManager};

    fn request(id: &str) -> TransferRequest {
        TransferRequest {
            id: FileId::from(id),
            file: Arc::new(CandidateFile::new(
                "a.pdf",
                "application/pdf",
                100,
                Path::new("a.pdf"),
            )),
            offset: 0,
            transfer: 1,
        }
    }

    #[tokio::test]
    async fn abort_stops_transfer_without_reports() {
        let (sender, mut receiver) = mpsc::channel(16);
        let mut tasks = TaskManager::new(sender, Duration::from_secs(3600), 0.0);

        tasks.run(Task::Transfer(request("a")));
        tasks.abort(&FileId::from("a"));

        assert!(tasks.finishing().await.is_ok());
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn finishing_cancels_running_transfers() {
        let (sender, _receiver) = mpsc::channel(16);
        let mut tasks = TaskManager::new(sender, Duration::from_secs(3600), 0.0);

        tasks.run(Task::Transfer(request("a")));
        tasks.run(Task::Transfer(request("b")));

        assert!(tasks.finishing().await.is_ok());
        assert!(tasks.transfers.is_empty());
    }

    #[tokio::test]
    async fn transfer_reports_progress() {
        let (sender, mut receiver) = mpsc::channel(16);
        let mut tasks = TaskManager::new(sender, Duration::from_millis(1), 0.0);

        tasks.run(Task::Transfer(request("a")));

        let envelope = receiver.recv().await.expect("progress message");
        assert!(matches!(
            envelope.messages.first(),
            Some(Message::Session(SessionMessage::TransferProgressed(_)))
        ));

        let _ = tasks.finishing().await;
    }

    #[tokio::test]
    async fn load_preview_of_broken_image_reports_error_and_empty_preview() {
        let (sender, mut receiver) = mpsc::channel(16);
        let mut tasks = TaskManager::new(sender, Duration::from_millis(1), 0.0);

        tasks.run(Task::LoadPreview(
            FileId::from("a"),
            Path::new("/nonexistent/lob/preview.png").to_path_buf(),
        ));

        let error = receiver.recv().await.expect("error message");
        assert!(matches!(error.messages.first(), Some(Message::Error(_))));

        let preview = receiver.recv().await.expect("preview message");
        assert_eq!(
            vec![Message::PreviewLoaded(FileId::from("a"), Preview::None)],
            preview.messages
        );

        assert!(tasks.finishing().await.is_ok());
    }
}
