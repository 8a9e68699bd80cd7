//! Domain models for reaction role bindings.

use serenity::all::ReactionType;

/// A role granted by reacting to a message with an emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRole {
    pub message_id: String,
    /// Emoji key as produced by [`emoji_key`].
    pub emoji: String,
    pub server_id: String,
    pub channel_id: String,
    pub role_id: String,
}

impl ReactionRole {
    pub fn from_entity(entity: entity::reaction_role::Model) -> Self {
        Self {
            message_id: entity.message_id,
            emoji: entity.emoji,
            server_id: entity.server_id,
            channel_id: entity.channel_id,
            role_id: entity.role_id,
        }
    }
}

/// Stable key for a reaction emoji.
///
/// Unicode emoji are keyed by their text, custom emoji by their id so renaming the emoji
/// keeps the binding.
pub fn emoji_key(reaction: &ReactionType) -> String {
    match reaction {
        ReactionType::Unicode(text) => text.clone(),
        ReactionType::Custom { id, .. } => id.get().to_string(),
        other => other.to_string(),
    }
}
