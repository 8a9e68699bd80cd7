//! Guild settings factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating guild settings rows.
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    message_channel_id: Option<String>,
    camera_tracking: bool,
}

impl<'a> GuildSettingsFactory<'a> {
    /// Defaults: unique server id, no message channel, tracking enabled.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            server_id: next_id().to_string(),
            message_channel_id: None,
            camera_tracking: true,
        }
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    pub fn message_channel_id(mut self, channel_id: Option<String>) -> Self {
        self.message_channel_id = channel_id;
        self
    }

    pub fn camera_tracking(mut self, enabled: bool) -> Self {
        self.camera_tracking = enabled;
        self
    }

    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        entity::guild_settings::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            message_channel_id: ActiveValue::Set(self.message_channel_id),
            camera_tracking: ActiveValue::Set(self.camera_tracking),
        }
        .insert(self.db)
        .await
    }
}

/// Creates guild settings with tracking enabled for the given server.
pub async fn create_guild_settings(
    db: &DatabaseConnection,
    server_id: &str,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db).server_id(server_id).build().await
}
