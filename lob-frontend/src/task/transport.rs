use std::time::Duration;

use futures::future::BoxFuture;
use lob_file::MIB;
use lob_session::message::{SessionMessage, Throughput, TransferReport, TransferRequest};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;

use crate::{
    error::AppError,
    event::{Envelope, Message, MessageSource},
};

/// Part of a file handed to a transport. `offset` bytes are stored remotely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chunk {
    pub offset: u64,
    pub total: u64,
}

pub trait Transport: Send {
    /// Sends the next part of the file and resolves to the amount of bytes the
    /// remote accepted.
    fn send(&mut self, chunk: Chunk) -> BoxFuture<'_, Result<u64, AppError>>;

    fn abort(&mut self);

    /// Bytes per second of the last send.
    fn throughput(&self) -> f64;
}

pub struct SimulatedTransport {
    failure_rate: f64,
    rng: StdRng,
    speed: f64,
    tick: Duration,
}

impl SimulatedTransport {
    /// Non finite failure rates never fail, others are clamped to `0..=1`.
    pub fn new(tick: Duration, failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_finite() {
            failure_rate.clamp(0.0, 1.0)
        } else {
            tracing::warn!("ignoring invalid failure rate: {}", failure_rate);
            0.0
        };

        Self {
            failure_rate,
            rng: StdRng::from_entropy(),
            speed: 0.0,
            tick,
        }
    }
}

impl Transport for SimulatedTransport {
    fn send(&mut self, chunk: Chunk) -> BoxFuture<'_, Result<u64, AppError>> {
        Box::pin(async move {
            tokio::time::sleep(self.tick).await;

            if self.rng.gen_bool(self.failure_rate) {
                self.speed = 0.0;
                return Err(AppError::TransferRejected("Upload failed".to_owned()));
            }

            let increment = self.rng.gen_range(0.0..0.1);
            let accepted = (chunk.total as f64 * increment).ceil() as u64;

            self.speed = MIB as f64 * (0.5 + self.rng.gen::<f64>());

            Ok(accepted.min(chunk.total.saturating_sub(chunk.offset)))
        })
    }

    fn abort(&mut self) {
        self.speed = 0.0;
    }

    fn throughput(&self) -> f64 {
        self.speed
    }
}

/// Drives `transport` from the requested offset until the file is complete,
/// the transport fails, or `cancellation` fires. Cancelled transfers report
/// nothing.
#[tracing::instrument(skip(transport, cancellation, sender), fields(id = %request.id))]
pub async fn run_transfer<T: Transport>(
    mut transport: T,
    request: TransferRequest,
    cancellation: CancellationToken,
    sender: Sender<Envelope>,
) -> Result<(), AppError> {
    let total = request.file.size;
    let mut uploaded = request.offset.min(total);

    loop {
        let chunk = Chunk {
            offset: uploaded,
            total,
        };

        let result = select_send(&mut transport, chunk, &cancellation).await;
        let result = match result {
            Some(it) => it,
            None => {
                transport.abort();
                tracing::debug!("transfer cancelled at {} of {} bytes", uploaded, total);
                return Ok(());
            }
        };

        let (message, finished) = match result {
            Ok(accepted) => {
                uploaded = (uploaded + accepted).min(total);

                let report = TransferReport {
                    id: request.id.clone(),
                    transfer: request.transfer,
                    content: Throughput {
                        bytes_uploaded: uploaded,
                        speed: transport.throughput(),
                    },
                };

                (SessionMessage::TransferProgressed(report), uploaded >= total)
            }
            Err(error) => {
                tracing::warn!("transfer failed: {:?}", error);

                let report = TransferReport {
                    id: request.id.clone(),
                    transfer: request.transfer,
                    content: error.to_string(),
                };

                (SessionMessage::TransferFailed(report), true)
            }
        };

        sender
            .send(Envelope {
                messages: vec![Message::Session(message)],
                source: MessageSource::Task,
            })
            .await?;

        if finished {
            return Ok(());
        }
    }
}

async fn select_send<T: Transport>(
    transport: &mut T,
    chunk: Chunk,
    cancellation: &CancellationToken,
) -> Option<Result<u64, AppError>> {
    tokio::select! {
        _ = cancellation.cancelled() => None,
        result = transport.send(chunk) => Some(result),
    }
}
