pub use sea_orm_migration::prelude::*;

mod m20250904_183012_create_music_info_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250904_183012_create_music_info_table::Migration)]
    }
}
