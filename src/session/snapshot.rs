use std::sync::Arc;

use crate::{domain::models::PracticeRecord, error::SessionError};

/// What a presentation surface renders. Each `Loaded` value is a full copy of
/// the store taken right after the command that published it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    Loading,
    Loaded(Arc<[PracticeRecord]>),
    Failed(SessionError),
}

impl Snapshot {
    /// Loaded records, or nothing while loading or failed.
    pub fn records(&self) -> &[PracticeRecord] {
        match self {
            Snapshot::Loaded(records) => records,
            Snapshot::Loading | Snapshot::Failed(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Snapshot::Loading)
    }

    pub fn error(&self) -> Option<&SessionError> {
        match self {
            Snapshot::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;

    #[test]
    fn loading_and_failed_expose_no_records() {
        assert!(Snapshot::Loading.records().is_empty());
        assert!(Snapshot::Loading.is_loading());

        let failed = Snapshot::Failed(SessionError::Store(StoreError::Database("locked".into())));
        assert!(failed.records().is_empty());
        assert!(!failed.is_loading());
        assert!(failed.error().is_some());
    }

    #[test]
    fn loaded_empty_is_not_loading() {
        let loaded = Snapshot::Loaded(Vec::<PracticeRecord>::new().into());
        assert!(!loaded.is_loading());
        assert!(loaded.records().is_empty());
        assert_eq!(loaded.error(), None);
    }
}
