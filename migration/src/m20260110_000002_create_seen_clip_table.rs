use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dedup record: a clip id may repeat across guilds but not within one
        manager
            .create_table(
                Table::create()
                    .table(SeenClip::Table)
                    .if_not_exists()
                    .col(string(SeenClip::GuildId).not_null())
                    .col(string(SeenClip::ClipId).not_null())
                    .col(
                        timestamp(SeenClip::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(Index::create().col(SeenClip::GuildId).col(SeenClip::ClipId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seen_clip_guild_id")
                    .table(SeenClip::Table)
                    .col(SeenClip::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_seen_clip_guild_id")
                    .table(SeenClip::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SeenClip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeenClip {
    Table,
    GuildId,
    ClipId,
    CreatedAt,
}
