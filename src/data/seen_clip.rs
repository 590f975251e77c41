use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository for the per-guild seen clip set.
///
/// Rows are write-once; the same clip id is tracked independently per guild so
/// that two guilds monitoring the same Twitch channel each receive the clip.
pub struct SeenClipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeenClipRepository<'a> {
    /// Creates a new repository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a clip has already been recorded for a guild.
    pub async fn is_seen(&self, guild_id: &str, clip_id: &str) -> Result<bool, DbErr> {
        let existing = entity::prelude::SeenClip::find()
            .filter(entity::seen_clip::Column::GuildId.eq(guild_id))
            .filter(entity::seen_clip::Column::ClipId.eq(clip_id))
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }

    /// Records a clip as seen for a guild.
    ///
    /// Idempotent: inserting an already-recorded (guild, clip) pair is a no-op
    /// rather than an error, so a poll run that re-evaluates a clip after a
    /// crash cannot fail here.
    pub async fn mark_seen(&self, guild_id: &str, clip_id: &str) -> Result<(), DbErr> {
        use migration::OnConflict;

        entity::prelude::SeenClip::insert(entity::seen_clip::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            clip_id: ActiveValue::Set(clip_id.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::seen_clip::Column::GuildId,
                entity::seen_clip::Column::ClipId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .do_nothing()
        .exec(self.db)
        .await?;

        Ok(())
    }
}
