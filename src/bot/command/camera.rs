//! Camera enforcement settings commands.

use serenity::all::GuildChannel;

use crate::{
    bot::command::{require_guild, Context},
    error::AppError,
    service::camera::CameraService,
};

/// Require cameras in a voice channel
#[poise::command(
    slash_command,
    guild_only,
    rename = "add-cam-channel",
    default_member_permissions = "MANAGE_GUILD"
)]
pub async fn add_cam_channel(
    ctx: Context<'_>,
    #[description = "Voice channel to enforce"]
    #[channel_types("Voice", "Stage")]
    channel: GuildChannel,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;

    let added = CameraService::new(&ctx.data().db)
        .add_channel(&guild_id.to_string(), &channel.id.to_string())
        .await?;

    let reply = if added {
        format!("Cameras are now required in <#{}>.", channel.id)
    } else {
        format!("<#{}> already requires cameras.", channel.id)
    };

    ctx.say(reply).await?;

    Ok(())
}

/// Stop requiring cameras in a voice channel
#[poise::command(
    slash_command,
    guild_only,
    rename = "remove-cam-channel",
    default_member_permissions = "MANAGE_GUILD"
)]
pub async fn remove_cam_channel(
    ctx: Context<'_>,
    #[description = "Voice channel to stop enforcing"]
    #[channel_types("Voice", "Stage")]
    channel: GuildChannel,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;

    let removed = CameraService::new(&ctx.data().db)
        .remove_channel(&guild_id.to_string(), &channel.id.to_string())
        .await?;

    if !removed {
        return Err(AppError::NotFound(format!(
            "<#{}> does not require cameras.",
            channel.id
        )));
    }

    ctx.say(format!("Cameras are no longer required in <#{}>.", channel.id))
        .await?;

    Ok(())
}

/// Set the channel camera warnings are posted in
#[poise::command(
    slash_command,
    guild_only,
    rename = "set-message-channel",
    default_member_permissions = "MANAGE_GUILD"
)]
pub async fn set_message_channel(
    ctx: Context<'_>,
    #[description = "Text channel for camera warnings"]
    #[channel_types("Text")]
    channel: GuildChannel,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;

    CameraService::new(&ctx.data().db)
        .set_message_channel(&guild_id.to_string(), &channel.id.to_string())
        .await?;

    ctx.say(format!("Camera warnings will be posted in <#{}>.", channel.id))
        .await?;

    Ok(())
}

/// Turn camera enforcement on for this server
#[poise::command(
    slash_command,
    guild_only,
    rename = "enable-tracking",
    default_member_permissions = "MANAGE_GUILD"
)]
pub async fn enable_tracking(ctx: Context<'_>) -> Result<(), AppError> {
    set_tracking(ctx, true).await
}

/// Turn camera enforcement off for this server
#[poise::command(
    slash_command,
    guild_only,
    rename = "disable-tracking",
    default_member_permissions = "MANAGE_GUILD"
)]
pub async fn disable_tracking(ctx: Context<'_>) -> Result<(), AppError> {
    set_tracking(ctx, false).await
}

async fn set_tracking(ctx: Context<'_>, enabled: bool) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;

    CameraService::new(&ctx.data().db)
        .set_tracking(&guild_id.to_string(), enabled)
        .await?;

    let reply = if enabled {
        "Camera tracking enabled."
    } else {
        "Camera tracking disabled."
    };

    ctx.say(reply).await?;

    Ok(())
}
