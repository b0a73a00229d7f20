use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

type WriteOp = Pin<Box<dyn Future<Output = Result<(), RepositoryError>> + Send>>;

enum Envelope {
    Op(WriteOp),
    Flush(oneshot::Sender<()>),
}

/// Write-behind queue for one persisted collection.
///
/// Mutating store operations update memory synchronously and hand the
/// matching persistence write to this queue. A background task processes
/// writes strictly in issuance order, so two writes for the same key can
/// never land in storage out of order. Failures are logged and swallowed:
/// persistence is a best-effort cache of session state, never something
/// the caller blocks on.
pub struct WriteQueue {
    collection: &'static str,
    tx: mpsc::UnboundedSender<Envelope>,
    logger: Arc<dyn Logger>,
}

impl WriteQueue {
    /// Spawns the queue worker on the current tokio runtime.
    pub fn spawn(collection: &'static str, logger: Arc<dyn Logger>) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Envelope>();

        let worker_logger = Arc::clone(&logger);
        tokio::spawn(async move {
            while let Some(envelope) = rx.recv().await {
                match envelope {
                    Envelope::Op(op) => {
                        if let Err(e) = op.await {
                            worker_logger
                                .warn(&format!("Persistence write for {} failed: {}", collection, e));
                        }
                    }
                    Envelope::Flush(done) => {
                        let _ = done.send(());
                    }
                }
            }
        });

        Self {
            collection,
            tx,
            logger,
        }
    }

    /// Enqueues one persistence write without waiting for it.
    pub fn enqueue<F>(&self, op: F)
    where
        F: Future<Output = Result<(), RepositoryError>> + Send + 'static,
    {
        if self.tx.send(Envelope::Op(Box::pin(op))).is_err() {
            self.logger
                .warn(&format!("Write queue for {} is gone, dropping write", self.collection));
        }
    }

    /// Resolves once every write enqueued before this call has completed.
    pub async fn flush(&self) {
        let (tx, rx) = oneshot::channel();
        if self.tx.send(Envelope::Flush(tx)).is_ok() {
            let _ = rx.await;
        }
    }
}
