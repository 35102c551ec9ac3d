// Domain models shared by the store, the repository and the session controller

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RecordError;

/// Mastery of one hand's part, as a whole percentage in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const MIN: Progress = Progress(0);
    pub const MAX: Progress = Progress(100);

    pub fn new(value: i64) -> Result<Self, RecordError> {
        if (0..=100).contains(&value) {
            Ok(Progress(value as u8))
        } else {
            Err(RecordError::InvalidRange { value })
        }
    }

    /// Clamp a slider position (0.0 - 100.0) into a progress value.
    /// Fractions are truncated and NaN reads as 0.
    pub fn from_slider(position: f32) -> Self {
        if position.is_nan() {
            return Progress::MIN;
        }
        Progress(position.clamp(0.0, 100.0) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// 0.0 - 1.0 fraction, as a circular indicator expects it
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl TryFrom<i64> for Progress {
    type Error = RecordError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Progress::new(value)
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One piece being learned, with independent per-hand progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeRecord {
    pub id: Uuid,
    pub title: String,
    pub artist: String,
    pub memo: String,
    pub right_hand_progress: Progress,
    pub left_hand_progress: Progress,
}

impl PracticeRecord {
    /// A fresh record with no progress yet. Ids are v7 so they sort by creation.
    pub fn new(title: impl Into<String>, artist: impl Into<String>, memo: impl Into<String>) -> Self {
        PracticeRecord {
            id: Uuid::now_v7(),
            title: title.into(),
            artist: artist.into(),
            memo: memo.into(),
            right_hand_progress: Progress::MIN,
            left_hand_progress: Progress::MIN,
        }
    }

    /// Same identity, new per-hand progress. Fails before anything reaches a store.
    pub fn with_progress(self, right_hand: i64, left_hand: i64) -> Result<Self, RecordError> {
        Ok(PracticeRecord {
            right_hand_progress: Progress::new(right_hand)?,
            left_hand_progress: Progress::new(left_hand)?,
            ..self
        })
    }
}
