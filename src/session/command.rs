use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tokio::sync::oneshot;

use crate::{
    domain::models::PracticeRecord,
    error::{SessionError, SessionResult},
};

/// Work a [`SessionController`](super::SessionController) runs, one at a time, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-read the store and publish it.
    Reload,
    /// Store a new record with no progress. The published snapshot is left
    /// alone; follow with a reload or use `UpsertWithRefresh` to see it.
    CreateWithoutRefresh {
        title: String,
        artist: String,
        memo: String,
    },
    /// Insert or replace by id, then reload.
    UpsertWithRefresh(PracticeRecord),
    /// Delete by id, then reload.
    Delete(PracticeRecord),
}

impl Command {
    pub fn refreshes(&self) -> bool {
        !matches!(self, Command::CreateWithoutRefresh { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Reload => "reload",
            Command::CreateWithoutRefresh { .. } => "create_without_refresh",
            Command::UpsertWithRefresh(_) => "upsert_with_refresh",
            Command::Delete(_) => "delete",
        }
    }
}

/// Completion of a dispatched command. Await it to learn the outcome, or
/// drop it to fire and forget; the command runs either way.
#[derive(Debug)]
pub struct Pending {
    reply: oneshot::Receiver<SessionResult<()>>,
}

impl Pending {
    pub(super) fn new(reply: oneshot::Receiver<SessionResult<()>>) -> Self {
        Self { reply }
    }
}

impl Future for Pending {
    type Output = SessionResult<()>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.reply)
            .poll(cx)
            .map(|reply| reply.unwrap_or(Err(SessionError::Closed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_plain_create_skips_refresh() {
        let record = PracticeRecord::new("Let It Go", "", "");
        assert!(Command::Reload.refreshes());
        assert!(Command::UpsertWithRefresh(record.clone()).refreshes());
        assert!(Command::Delete(record).refreshes());
        assert!(
            !Command::CreateWithoutRefresh {
                title: "Let It Go".into(),
                artist: String::new(),
                memo: String::new(),
            }
            .refreshes()
        );
    }

    #[tokio::test]
    async fn pending_resolves_with_reply() {
        let (tx, rx) = oneshot::channel();
        tx.send(Ok(())).unwrap();
        assert_eq!(Pending::new(rx).await, Ok(()));
    }

    #[tokio::test]
    async fn pending_without_reply_is_closed() {
        let (tx, rx) = oneshot::channel::<SessionResult<()>>();
        drop(tx);
        assert_eq!(Pending::new(rx).await, Err(SessionError::Closed));
    }
}
