//! Guild settings data repository.
//!
//! Guilds without a row use [`GuildSettings::defaults`]; each setter upserts only its own
//! column so toggling tracking never clears the message channel and vice versa.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::camera::GuildSettings;

pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the guild's settings, falling back to defaults when none were stored.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Stored settings or defaults
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, server_id: &str) -> Result<GuildSettings, DbErr> {
        let entity = entity::prelude::GuildSettings::find_by_id(server_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity
            .map(GuildSettings::from_entity)
            .unwrap_or_else(|| GuildSettings::defaults(server_id)))
    }

    /// Sets the text channel camera warnings are posted to.
    pub async fn set_message_channel(&self, server_id: &str, channel_id: &str) -> Result<(), DbErr> {
        let defaults = GuildSettings::defaults(server_id);

        entity::prelude::GuildSettings::insert(entity::guild_settings::ActiveModel {
            server_id: ActiveValue::Set(defaults.server_id),
            message_channel_id: ActiveValue::Set(Some(channel_id.to_string())),
            camera_tracking: ActiveValue::Set(defaults.camera_tracking),
        })
        .on_conflict(
            OnConflict::column(entity::guild_settings::Column::ServerId)
                .update_column(entity::guild_settings::Column::MessageChannelId)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Enables or disables camera enforcement for the guild.
    pub async fn set_camera_tracking(&self, server_id: &str, enabled: bool) -> Result<(), DbErr> {
        entity::prelude::GuildSettings::insert(entity::guild_settings::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            message_channel_id: ActiveValue::Set(None),
            camera_tracking: ActiveValue::Set(enabled),
        })
        .on_conflict(
            OnConflict::column(entity::guild_settings::Column::ServerId)
                .update_column(entity::guild_settings::Column::CameraTracking)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
