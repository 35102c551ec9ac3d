use std::sync::Arc;

use crate::{domain::models::PracticeRecord, error::StoreResult, storage::RecordStore};

/// Write-path helper turning raw field input into a stored record.
#[derive(Clone)]
pub struct MusicInfoRepository {
    store: Arc<dyn RecordStore>,
}

impl MusicInfoRepository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Store a brand new record with both hands at 0%.
    ///
    /// Progress cannot be given here; build the record and upsert it for that.
    #[tracing::instrument(level = "debug", skip(self, memo))]
    pub async fn save_music_info(
        &self,
        title: &str,
        artist: &str,
        memo: &str,
    ) -> StoreResult<PracticeRecord> {
        let record = PracticeRecord::new(title, artist, memo);
        tracing::debug!(id = %record.id, "saving new music info");
        self.store.upsert(record.clone()).await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::models::Progress, storage::InMemoryRecordStore};

    #[tokio::test]
    async fn save_music_info_stores_a_fresh_record() {
        let store = InMemoryRecordStore::new();
        let repository = MusicInfoRepository::new(Arc::new(store.clone()));

        let saved = repository
            .save_music_info("Clair de Lune", "Debussy", "slow tempo")
            .await
            .unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all, vec![saved.clone()]);
        assert_eq!(saved.title, "Clair de Lune");
        assert_eq!(saved.artist, "Debussy");
        assert_eq!(saved.memo, "slow tempo");
        assert_eq!(saved.right_hand_progress, Progress::MIN);
        assert_eq!(saved.left_hand_progress, Progress::MIN);
    }

    #[tokio::test]
    async fn identical_input_creates_distinct_records() {
        let store = InMemoryRecordStore::new();
        let repository = MusicInfoRepository::new(Arc::new(store.clone()));
        repository.save_music_info("Canon", "", "").await.unwrap();
        repository.save_music_info("Canon", "", "").await.unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_ne!(all[0].id, all[1].id);
    }
}
