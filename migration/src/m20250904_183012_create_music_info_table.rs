use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MusicInfo::Table)
                    .if_not_exists()
                    .col(uuid(MusicInfo::Id).primary_key())
                    .col(string(MusicInfo::Title))
                    .col(string(MusicInfo::Artist))
                    .col(text(MusicInfo::Memo))
                    .col(integer(MusicInfo::RightHandProgress).default(0))
                    .col(integer(MusicInfo::LeftHandProgress).default(0))
                    .col(timestamp_with_time_zone(MusicInfo::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_music_info_created_at")
                    .table(MusicInfo::Table)
                    .col(MusicInfo::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MusicInfo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MusicInfo {
    Table,
    Id,
    Title,
    Artist,
    Memo,
    RightHandProgress,
    LeftHandProgress,
    CreatedAt,
}
