//! InMemoryRecordStore - Vec-backed store for tests and embedding without a database.

use std::sync::Arc;

use tokio::sync::RwLock;

use super::RecordStore;
use crate::{domain::models::PracticeRecord, error::StoreResult};

/// Keeps insertion order. Clone-friendly via Arc; clones share the collection.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Vec<PracticeRecord>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<PracticeRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get_all(&self) -> StoreResult<Vec<PracticeRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn upsert(&self, record: PracticeRecord) -> StoreResult<()> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(())
    }

    async fn delete(&self, record: &PracticeRecord) -> StoreResult<()> {
        self.records.write().await.retain(|r| r.id != record.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_replaces_by_id() {
        let store = InMemoryRecordStore::new();
        let record = PracticeRecord::new("Moonlight Sonata", "Beethoven", "");
        store.upsert(record.clone()).await.unwrap();
        let edited = record.clone().with_progress(20, 5).unwrap();
        store.upsert(edited.clone()).await.unwrap();

        assert_eq!(store.get_all().await.unwrap(), vec![edited]);
    }

    #[tokio::test]
    async fn delete_unknown_is_ignored() {
        let record = PracticeRecord::new("Moonlight Sonata", "Beethoven", "");
        let store = InMemoryRecordStore::with_records(vec![record.clone()]);
        store
            .delete(&PracticeRecord::new("other", "", ""))
            .await
            .unwrap();
        assert_eq!(store.get_all().await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryRecordStore::new();
        let other = store.clone();
        store
            .upsert(PracticeRecord::new("Liebestraum", "Liszt", ""))
            .await
            .unwrap();
        assert_eq!(other.get_all().await.unwrap().len(), 1);
    }
}
