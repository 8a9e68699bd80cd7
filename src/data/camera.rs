//! Camera channel data repository.
//!
//! Holds the set of voice channels per guild in which members must keep their camera on.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for enforced camera channels.
pub struct CameraRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CameraRepository<'a> {
    /// Creates a new CameraRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a channel to the guild's enforced set.
    ///
    /// # Returns
    /// - `Ok(true)` - Channel added
    /// - `Ok(false)` - Channel was already enforced
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add(&self, server_id: &str, channel_id: &str) -> Result<bool, DbErr> {
        let inserted = entity::prelude::CameraChannel::insert(entity::camera_channel::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::camera_channel::Column::ServerId,
                entity::camera_channel::Column::ChannelId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Removes a channel from the guild's enforced set.
    ///
    /// # Returns
    /// - `Ok(true)` - Channel removed
    /// - `Ok(false)` - Channel was not enforced
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(&self, server_id: &str, channel_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::CameraChannel::delete_by_id((
            server_id.to_string(),
            channel_id.to_string(),
        ))
        .exec(self.db)
        .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a channel is in the guild's enforced set.
    pub async fn is_enforced(&self, server_id: &str, channel_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::CameraChannel::find()
            .filter(entity::camera_channel::Column::ServerId.eq(server_id))
            .filter(entity::camera_channel::Column::ChannelId.eq(channel_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
