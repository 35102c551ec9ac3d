//! Practice tracking for piano cover learners: per-piece records with
//! right/left hand progress, persisted locally and served to a UI through a
//! [`session::SessionController`].

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod session;
pub mod storage;

pub use domain::models::{PracticeRecord, Progress};
pub use error::{RecordError, SessionError, StoreError};
pub use session::{Command, Pending, SessionController, Snapshot};
