//! Reaction role binding factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a reaction role binding for `emoji` on a fresh message id.
pub async fn create_reaction_role(
    db: &DatabaseConnection,
    server_id: &str,
    emoji: &str,
) -> Result<entity::reaction_role::Model, DbErr> {
    entity::reaction_role::ActiveModel {
        message_id: ActiveValue::Set(next_id().to_string()),
        emoji: ActiveValue::Set(emoji.to_string()),
        server_id: ActiveValue::Set(server_id.to_string()),
        channel_id: ActiveValue::Set(next_id().to_string()),
        role_id: ActiveValue::Set(next_id().to_string()),
    }
    .insert(db)
    .await
}
