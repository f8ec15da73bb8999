//! Fire-and-forget snapshot writes on a background thread

use crate::domain::Collection;
use crate::error::{DiarioError, Result};
use crate::infrastructure::{KeyValueStore, SnapshotGateway};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, error};

enum Command {
    Write(Collection),
    Flush(Sender<()>),
}

/// Persists snapshots without making the caller wait.
///
/// Snapshots are written in the order they were submitted. A failed write is
/// logged and dropped; there is no retry. Dropping the writer waits for
/// every pending write to finish.
pub struct SnapshotWriter {
    tx: Option<Sender<Command>>,
    worker: Option<JoinHandle<()>>,
}

impl SnapshotWriter {
    pub fn spawn<S>(gateway: SnapshotGateway<S>) -> Result<Self>
    where
        S: KeyValueStore + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("diario-writer".to_string())
            .spawn(move || run(gateway, rx))?;

        Ok(SnapshotWriter {
            tx: Some(tx),
            worker: Some(worker),
        })
    }

    /// Queue `collection` for writing and return immediately
    pub fn submit(&self, collection: Collection) {
        let sent = self
            .tx
            .as_ref()
            .map(|tx| tx.send(Command::Write(collection)).is_ok())
            .unwrap_or(false);
        if !sent {
            error!("snapshot writer stopped, change will not be persisted");
        }
    }

    /// Block until every snapshot submitted so far has been handled
    pub fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = mpsc::channel();
        self.tx
            .as_ref()
            .ok_or(DiarioError::WriterClosed)?
            .send(Command::Flush(ack_tx))
            .map_err(|_| DiarioError::WriterClosed)?;
        ack_rx.recv().map_err(|_| DiarioError::WriterClosed)
    }
}

impl Drop for SnapshotWriter {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop once the queue is drained.
        self.tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("snapshot writer thread panicked");
            }
        }
    }
}

fn run<S: KeyValueStore>(gateway: SnapshotGateway<S>, rx: Receiver<Command>) {
    for command in rx {
        match command {
            Command::Write(collection) => {
                if let Err(e) = gateway.write(&collection) {
                    error!(error = %e, entries = collection.len(), "failed to persist snapshot");
                }
            }
            Command::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
    debug!("snapshot writer stopped");
}
