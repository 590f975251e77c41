//! Seen clip factory for creating test dedup records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seen clip records with customizable fields.
pub struct SeenClipFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    clip_id: String,
}

impl<'a> SeenClipFactory<'a> {
    /// Creates a new SeenClipFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    /// - clip_id: `"clip_{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            clip_id: format!("clip_{}", id),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the clip ID.
    pub fn clip_id(mut self, clip_id: impl Into<String>) -> Self {
        self.clip_id = clip_id.into();
        self
    }

    /// Inserts the seen clip record into the database.
    pub async fn build(self) -> Result<entity::seen_clip::Model, DbErr> {
        entity::seen_clip::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            clip_id: ActiveValue::Set(self.clip_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a seen clip record for the given guild with a generated clip id.
pub async fn create_seen_clip(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::seen_clip::Model, DbErr> {
    SeenClipFactory::new(db).guild_id(guild_id).build().await
}
