// Persistence boundary: the only code allowed to touch the record collection

pub mod memory;
pub mod sqlite;

use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, domain::models::PracticeRecord, error::StoreResult};

pub use memory::InMemoryRecordStore;
pub use sqlite::SqliteRecordStore;

#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Every live record, oldest first. Two calls with no write in between
    /// return the same order.
    async fn get_all(&self) -> StoreResult<Vec<PracticeRecord>>;

    /// Insert, or replace every field of the record sharing `record.id`.
    /// Progress is stored as given; callers own the 0..=100 contract.
    async fn upsert(&self, record: PracticeRecord) -> StoreResult<()>;

    /// Remove the record sharing `record.id`. Unknown ids are ignored.
    async fn delete(&self, record: &PracticeRecord) -> StoreResult<()>;
}

/// Open the configured database and bring its schema up to date.
#[tracing::instrument(level = "debug", skip(config), fields(max_connections = config.db_max_connections))]
pub async fn connect(config: &Config) -> StoreResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.db_connection_string.clone());
    options
        .max_connections(config.db_max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;
    migration::Migrator::up(&db, None).await?;
    tracing::debug!("database schema is up to date");
    Ok(db)
}
