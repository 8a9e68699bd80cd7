//! Reaction role bindings.

use sea_orm::DatabaseConnection;
use serenity::all::{ReactionType, RoleId};

use crate::{
    data::reaction_role::ReactionRoleRepository,
    error::AppError,
    model::reaction_role::{emoji_key, ReactionRole},
    util::parse::parse_role_id,
};

pub struct ReactionRoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReactionRoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Binds `emoji` on a posted message to a role.
    pub async fn bind(
        &self,
        server_id: &str,
        channel_id: &str,
        message_id: &str,
        emoji: &ReactionType,
        role_id: &str,
    ) -> Result<(), AppError> {
        ReactionRoleRepository::new(self.db)
            .create(ReactionRole {
                message_id: message_id.to_string(),
                emoji: emoji_key(emoji),
                server_id: server_id.to_string(),
                channel_id: channel_id.to_string(),
                role_id: role_id.to_string(),
            })
            .await?;

        tracing::info!(
            "Bound reaction {} on message {} to role {}",
            emoji,
            message_id,
            role_id
        );

        Ok(())
    }

    /// Resolves the role granted by a reaction.
    ///
    /// # Returns
    /// - `Ok(Some(RoleId))` - The reaction is bound to a role
    /// - `Ok(None)` - The message/emoji pair is not bound
    /// - `Err(AppError::InternalErr)` - The stored role id no longer parses
    pub async fn role_for(
        &self,
        message_id: &str,
        emoji: &ReactionType,
    ) -> Result<Option<RoleId>, AppError> {
        let binding = ReactionRoleRepository::new(self.db)
            .find(message_id, &emoji_key(emoji))
            .await?;

        binding
            .map(|binding| parse_role_id(&binding.role_id))
            .transpose()
    }
}
