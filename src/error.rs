use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Rejections raised while building a [`PracticeRecord`](crate::domain::models::PracticeRecord).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("progress {value} is outside 0..=100")]
    InvalidRange { value: i64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),
    #[error("stored record {id} is malformed: {source}")]
    Corrupt { id: Uuid, source: RecordError },
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Errors surfaced to whoever drives a [`SessionController`](crate::session::SessionController).
///
/// Cloneable so the same failure can resolve the command and sit in
/// [`Snapshot::Failed`](crate::session::Snapshot::Failed).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("session controller has shut down")]
    Closed,
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type SessionResult<T> = Result<T, SessionError>;
