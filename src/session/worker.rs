use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use super::{command::Command, snapshot::Snapshot};
use crate::{error::SessionResult, repository::MusicInfoRepository, storage::RecordStore};

pub(super) struct Envelope {
    pub command: Command,
    pub reply: oneshot::Sender<SessionResult<()>>,
}

/// Owns every store call a controller makes. Runs until the controller's
/// queue closes, finishing whatever was already queued.
pub(super) struct Worker {
    store: Arc<dyn RecordStore>,
    repository: MusicInfoRepository,
    snapshot: watch::Sender<Snapshot>,
}

impl Worker {
    pub fn new(store: Arc<dyn RecordStore>, snapshot: watch::Sender<Snapshot>) -> Self {
        let repository = MusicInfoRepository::new(store.clone());
        Self {
            store,
            repository,
            snapshot,
        }
    }

    pub async fn run(self, mut commands: mpsc::UnboundedReceiver<Envelope>) {
        while let Some(Envelope { command, reply }) = commands.recv().await {
            let name = command.name();
            tracing::debug!(command = name, "running session command");
            let result = self.execute(command).await;
            if let Err(err) = &result {
                // a failed write never reloads; the surface sees the error instead
                tracing::warn!(command = name, error = %err, "session command failed");
                self.publish(Snapshot::Failed(err.clone()));
            }
            if reply.send(result).is_err() {
                tracing::trace!(command = name, "command outcome not awaited");
            }
        }
        tracing::debug!("session worker stopped");
    }

    async fn execute(&self, command: Command) -> SessionResult<()> {
        match command {
            Command::Reload => self.reload().await,
            Command::CreateWithoutRefresh {
                title,
                artist,
                memo,
            } => {
                self.repository
                    .save_music_info(&title, &artist, &memo)
                    .await?;
                Ok(())
            }
            Command::UpsertWithRefresh(record) => {
                self.store.upsert(record).await?;
                self.reload().await
            }
            Command::Delete(record) => {
                self.store.delete(&record).await?;
                self.reload().await
            }
        }
    }

    async fn reload(&self) -> SessionResult<()> {
        let records = self.store.get_all().await?;
        tracing::debug!(count = records.len(), "publishing snapshot");
        self.publish(Snapshot::Loaded(records.into()));
        Ok(())
    }

    fn publish(&self, snapshot: Snapshot) {
        // no receivers means the controller and every surface are gone
        if self.snapshot.send(snapshot).is_err() {
            tracing::debug!("no subscribers left, snapshot dropped");
        }
    }
}
