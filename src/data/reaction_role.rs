//! Reaction role data repository.
//!
//! Bindings are keyed on (message, emoji key); see [`crate::model::reaction_role::emoji_key`].

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::reaction_role::ReactionRole;

/// Repository providing database operations for reaction role bindings.
pub struct ReactionRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Binds an emoji on a message to a role, replacing a previous binding of the pair.
    ///
    /// # Returns
    /// - `Ok(())` - Binding stored
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn create(&self, binding: ReactionRole) -> Result<(), DbErr> {
        entity::prelude::ReactionRole::insert(entity::reaction_role::ActiveModel {
            message_id: ActiveValue::Set(binding.message_id),
            emoji: ActiveValue::Set(binding.emoji),
            server_id: ActiveValue::Set(binding.server_id),
            channel_id: ActiveValue::Set(binding.channel_id),
            role_id: ActiveValue::Set(binding.role_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::reaction_role::Column::MessageId,
                entity::reaction_role::Column::Emoji,
            ])
            .update_columns([
                entity::reaction_role::Column::ServerId,
                entity::reaction_role::Column::ChannelId,
                entity::reaction_role::Column::RoleId,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Finds the binding for a reaction.
    ///
    /// # Returns
    /// - `Ok(Some(ReactionRole))` - The message/emoji pair grants a role
    /// - `Ok(None)` - The reaction is not bound
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, message_id: &str, emoji: &str) -> Result<Option<ReactionRole>, DbErr> {
        let entity =
            entity::prelude::ReactionRole::find_by_id((message_id.to_string(), emoji.to_string()))
                .one(self.db)
                .await?;

        Ok(entity.map(ReactionRole::from_entity))
    }
}
