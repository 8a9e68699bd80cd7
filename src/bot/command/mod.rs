//! Slash commands.
//!
//! Every command is a poise command function returning `Result<(), AppError>`. Failures are
//! routed to [`on_error`], which logs the full error and answers the invoking user with
//! [`AppError::user_message`] only.

use poise::CreateReply;
use serenity::all::GuildId;

use crate::{error::AppError, state::AppState};

pub mod camera;
pub mod pomodoro;
pub mod reaction_role;
pub mod stats;

pub type Context<'a> = poise::Context<'a, AppState, AppError>;
pub type Command = poise::Command<AppState, AppError>;

/// Every slash command the bot registers.
pub fn all() -> Vec<Command> {
    vec![
        stats::study_stats(),
        stats::study_stats_of_user(),
        camera::add_cam_channel(),
        camera::remove_cam_channel(),
        camera::set_message_channel(),
        camera::enable_tracking(),
        camera::disable_tracking(),
        pomodoro::pomodoro_set(),
        pomodoro::session_info(),
        pomodoro::stop_session(),
        pomodoro::pomodoro_edit(),
        reaction_role::react_send_message(),
    ]
}

/// Logs a failed command and tells the invoking user what went wrong.
pub async fn on_error(error: poise::FrameworkError<'_, AppState, AppError>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Failed to set up slash commands: {}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Error in command `{}`: {}", ctx.command().name, error);

            let reply = CreateReply::default()
                .content(error.user_message())
                .ephemeral(true);

            if let Err(e) = ctx.send(reply).await {
                tracing::error!("Failed to report command error: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Guild the command was invoked in.
pub(crate) fn require_guild(ctx: Context<'_>) -> Result<GuildId, AppError> {
    ctx.guild_id()
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server.".to_string()))
}
