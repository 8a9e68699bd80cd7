//! Camera channel factory for creating enforced voice channel rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an enforced camera channel for the given server with a unique channel id.
pub async fn create_camera_channel(
    db: &DatabaseConnection,
    server_id: &str,
) -> Result<entity::camera_channel::Model, DbErr> {
    entity::camera_channel::ActiveModel {
        server_id: ActiveValue::Set(server_id.to_string()),
        channel_id: ActiveValue::Set(next_id().to_string()),
    }
    .insert(db)
    .await
}
