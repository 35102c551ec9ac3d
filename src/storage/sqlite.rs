use chrono::Utc;
use entities::music_info;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, sea_query::OnConflict};

use super::RecordStore;
use crate::{
    config::Config,
    domain::{
        mapping::{map_record_to_active, map_row_to_record},
        models::PracticeRecord,
    },
    error::StoreResult,
};

/// [`RecordStore`] over the `music_info` table.
#[derive(Clone, Debug)]
pub struct SqliteRecordStore {
    db: DatabaseConnection,
}

impl SqliteRecordStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connect and migrate in one step.
    pub async fn open(config: &Config) -> StoreResult<Self> {
        Ok(Self::new(super::connect(config).await?))
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait::async_trait]
impl RecordStore for SqliteRecordStore {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn get_all(&self) -> StoreResult<Vec<PracticeRecord>> {
        let rows = music_info::Entity::find()
            .order_by_asc(music_info::Column::CreatedAt)
            .order_by_asc(music_info::Column::Id)
            .all(&self.db)
            .await?;
        tracing::debug!(count = rows.len(), "loaded music info rows");
        rows.into_iter().map(map_row_to_record).collect()
    }

    #[tracing::instrument(level = "debug", skip(self, record), fields(id = %record.id))]
    async fn upsert(&self, record: PracticeRecord) -> StoreResult<()> {
        // created_at only lands on first insert so a replaced record keeps its place
        let active = map_record_to_active(record, Utc::now());
        music_info::Entity::insert(active)
            .on_conflict(
                OnConflict::column(music_info::Column::Id)
                    .update_columns([
                        music_info::Column::Title,
                        music_info::Column::Artist,
                        music_info::Column::Memo,
                        music_info::Column::RightHandProgress,
                        music_info::Column::LeftHandProgress,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, record), fields(id = %record.id))]
    async fn delete(&self, record: &PracticeRecord) -> StoreResult<()> {
        let result = music_info::Entity::delete_by_id(record.id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            tracing::debug!("nothing to delete");
        }
        Ok(())
    }
}
