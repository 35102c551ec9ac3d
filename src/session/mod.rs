//! The state-management core between a [`RecordStore`] and whatever renders it.
//!
//! A [`SessionController`] publishes [`Snapshot`]s on a watch channel. The
//! published records are only ever replaced by a fresh `get_all` from the
//! store, never edited in place.

mod command;
mod snapshot;
mod worker;

use std::sync::Arc;

use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
};

pub use command::{Command, Pending};
pub use snapshot::Snapshot;

use crate::{domain::models::PracticeRecord, error::SessionError, storage::RecordStore};
use worker::{Envelope, Worker};

pub struct SessionController {
    commands: mpsc::UnboundedSender<Envelope>,
    snapshot: watch::Receiver<Snapshot>,
    worker: JoinHandle<()>,
}

impl SessionController {
    /// Start the controller's worker and queue the initial load. Must be
    /// called from within a tokio runtime.
    pub fn spawn(store: Arc<dyn RecordStore>) -> Self {
        let (snapshot_tx, snapshot) = watch::channel(Snapshot::Loading);
        let (commands, queue) = mpsc::unbounded_channel();
        let worker = tokio::spawn(Worker::new(store, snapshot_tx).run(queue));
        let controller = Self {
            commands,
            snapshot,
            worker,
        };
        // the initial load resolves on its own; its outcome lands in the snapshot
        drop(controller.dispatch(Command::Reload));
        controller
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.clone()
    }

    /// Wait for the first snapshot that is no longer `Loading`.
    pub async fn settled(&self) -> Snapshot {
        let mut snapshot = self.subscribe();
        let settled = match snapshot.wait_for(|s| !s.is_loading()).await {
            Ok(current) => current.clone(),
            Err(_) => Snapshot::Failed(SessionError::Closed),
        };
        settled
    }

    /// Create a record with no progress. Does not refresh the snapshot.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn save_values(
        &self,
        title: impl Into<String>,
        artist: impl Into<String>,
        memo: impl Into<String>,
    ) -> Pending {
        self.dispatch(Command::CreateWithoutRefresh {
            title: title.into(),
            artist: artist.into(),
            memo: memo.into(),
        })
    }

    /// Insert or replace `record`; once resolved the snapshot contains it.
    #[tracing::instrument(level = "debug", skip(self, record), fields(id = %record.id))]
    pub fn insert_music_info(&self, record: PracticeRecord) -> Pending {
        self.dispatch(Command::UpsertWithRefresh(record))
    }

    /// Remove `record`; once resolved the snapshot no longer contains it.
    #[tracing::instrument(level = "debug", skip(self, record), fields(id = %record.id))]
    pub fn delete_music_info(&self, record: PracticeRecord) -> Pending {
        self.dispatch(Command::Delete(record))
    }

    pub fn reload(&self) -> Pending {
        self.dispatch(Command::Reload)
    }

    pub fn dispatch(&self, command: Command) -> Pending {
        let (reply, outcome) = oneshot::channel();
        if let Err(mpsc::error::SendError(envelope)) =
            self.commands.send(Envelope { command, reply })
        {
            tracing::warn!(command = envelope.command.name(), "session worker is gone");
            let _ = envelope.reply.send(Err(SessionError::Closed));
        }
        Pending::new(outcome)
    }

    /// Close the queue and wait for already queued commands to finish.
    pub async fn shutdown(self) {
        let Self {
            commands,
            snapshot,
            worker,
        } = self;
        drop(commands);
        drop(snapshot);
        if let Err(err) = worker.await {
            tracing::error!(error = %err, "session worker panicked");
        }
    }
}
