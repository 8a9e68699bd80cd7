use poise::CreateReply;
use serenity::all::{CreateMessage, GuildChannel, ReactionType, Role};

use crate::{
    bot::command::{require_guild, Context},
    error::AppError,
    service::reaction_role::ReactionRoleService,
};

/// Post a message that grants a role to everyone reacting with an emoji
#[poise::command(
    slash_command,
    guild_only,
    rename = "react-send-message",
    default_member_permissions = "MANAGE_ROLES"
)]
pub async fn react_send_message(
    ctx: Context<'_>,
    #[description = "Message text"] message: String,
    #[description = "Channel to post in"]
    #[channel_types("Text")]
    channel: GuildChannel,
    #[description = "Role to grant"] role: Role,
    #[description = "Emoji to react with"] emoji: String,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;

    let reaction = ReactionType::try_from(emoji.trim())
        .map_err(|_| AppError::BadRequest(format!("`{}` is not a valid emoji.", emoji)))?;

    let posted = channel
        .id
        .send_message(ctx.serenity_context(), CreateMessage::new().content(message))
        .await?;

    posted
        .react(ctx.serenity_context(), reaction.clone())
        .await?;

    ReactionRoleService::new(&ctx.data().db)
        .bind(
            &guild_id.to_string(),
            &channel.id.to_string(),
            &posted.id.to_string(),
            &reaction,
            &role.id.to_string(),
        )
        .await?;

    ctx.send(
        CreateReply::default()
            .content(format!(
                "Reacting with {} in <#{}> now grants <@&{}>.",
                reaction, channel.id, role.id
            ))
            .ephemeral(true),
    )
    .await?;

    Ok(())
}
