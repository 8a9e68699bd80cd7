//! Reaction event handlers for reaction roles.
//!
//! Adding a bound reaction grants the role, removing it revokes the role. Reactions the bot
//! adds itself when posting a reaction role message are ignored.

use serenity::all::{Context, GuildId, Reaction, RoleId, UserId};

use crate::{service::reaction_role::ReactionRoleService, state::AppState};

/// Handles a reaction added to any message.
pub async fn handle_reaction_add(state: &AppState, ctx: Context, reaction: Reaction) {
    let Some((guild_id, user_id, role_id)) = resolve(state, &ctx, &reaction).await else {
        return;
    };

    match ctx
        .http
        .add_member_role(guild_id, user_id, role_id, Some("Reaction role"))
        .await
    {
        Ok(()) => tracing::info!(
            "Granted role {} to user {} in guild {}",
            role_id,
            user_id,
            guild_id
        ),
        Err(e) => tracing::error!(
            "Failed to grant role {} to user {} in guild {}: {}",
            role_id,
            user_id,
            guild_id,
            e
        ),
    }
}

/// Handles a reaction removed from any message.
pub async fn handle_reaction_remove(state: &AppState, ctx: Context, reaction: Reaction) {
    let Some((guild_id, user_id, role_id)) = resolve(state, &ctx, &reaction).await else {
        return;
    };

    match ctx
        .http
        .remove_member_role(guild_id, user_id, role_id, Some("Reaction role"))
        .await
    {
        Ok(()) => tracing::info!(
            "Removed role {} from user {} in guild {}",
            role_id,
            user_id,
            guild_id
        ),
        Err(e) => tracing::error!(
            "Failed to remove role {} from user {} in guild {}: {}",
            role_id,
            user_id,
            guild_id,
            e
        ),
    }
}

/// Looks up the role bound to a member's reaction, skipping the bot's own reactions.
async fn resolve(
    state: &AppState,
    ctx: &Context,
    reaction: &Reaction,
) -> Option<(GuildId, UserId, RoleId)> {
    let guild_id = reaction.guild_id?;
    let user_id = reaction.user_id?;

    let bot_id = ctx.cache.current_user().id;
    if user_id == bot_id {
        return None;
    }

    match ReactionRoleService::new(&state.db)
        .role_for(&reaction.message_id.to_string(), &reaction.emoji)
        .await
    {
        Ok(role_id) => role_id.map(|role_id| (guild_id, user_id, role_id)),
        Err(e) => {
            tracing::error!(
                "Failed to look up reaction role for message {}: {}",
                reaction.message_id,
                e
            );
            None
        }
    }
}
