//! Pomodoro timer commands.

use chrono::Utc;
use poise::{ChoiceParameter, CreateReply};
use serenity::all::CreateEmbed;

use crate::{
    bot::command::{require_guild, Context},
    error::AppError,
    model::pomodoro::{format_remaining, PomodoroField, PomodoroSession, StartPomodoroParam},
    service::{
        notifier::DiscordNotifier,
        pomodoro::{PomodoroRunner, PomodoroService},
        timer::{TimerKey, TimerKind},
    },
    state::POMODORO_MINUTE,
};

const NO_SESSION: &str = "No Pomodoro session found.";

/// Start a pomodoro timer in this channel
#[poise::command(slash_command, guild_only, rename = "pomodoro-set")]
pub async fn pomodoro_set(
    ctx: Context<'_>,
    #[rename = "session-time"]
    #[description = "Focus minutes per session"]
    #[min = 1]
    #[max = 240]
    session_time: i32,
    #[rename = "break-time"]
    #[description = "Break minutes between sessions"]
    #[min = 1]
    #[max = 120]
    break_time: i32,
    #[rename = "number-of-sessions"]
    #[description = "How many focus sessions to run"]
    #[min = 1]
    #[max = 24]
    number_of_sessions: i32,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let user_id = ctx.author().id;
    let now = Utc::now();

    let param = StartPomodoroParam {
        server_id: guild_id.to_string(),
        user_id: user_id.to_string(),
        channel_id: ctx.channel_id().to_string(),
        session_minutes: session_time,
        break_minutes: break_time,
        total_sessions: number_of_sessions,
    };
    let completion = param.estimated_completion(now);

    let data = ctx.data();
    PomodoroService::new(&data.db).configure(param, now).await?;

    let embed = CreateEmbed::new()
        .title("Pomodoro configured")
        .field("Session time", format!("{} min", session_time), true)
        .field("Break time", format!("{} min", break_time), true)
        .field("Sessions", number_of_sessions.to_string(), true)
        .field("Estimated completion", discord_time(completion), false);

    ctx.send(CreateReply::default().embed(embed)).await?;

    let notifier = DiscordNotifier::new(ctx.serenity_context().http.clone());
    PomodoroRunner::new(data.db.clone(), notifier, POMODORO_MINUTE).spawn(
        &data.timers,
        guild_id.get(),
        user_id.get(),
    );

    Ok(())
}

/// Show your running pomodoro session
#[poise::command(slash_command, guild_only, rename = "session-info")]
pub async fn session_info(ctx: Context<'_>) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;

    let session = PomodoroService::new(&ctx.data().db)
        .get(&guild_id.to_string(), &ctx.author().id.to_string())
        .await?;

    let Some(session) = session else {
        ctx.say(NO_SESSION).await?;
        return Ok(());
    };

    ctx.send(CreateReply::default().embed(session_embed(&session)))
        .await?;

    Ok(())
}

/// Stop your pomodoro session
#[poise::command(slash_command, guild_only, rename = "stop-session")]
pub async fn stop_session(ctx: Context<'_>) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;
    let user_id = ctx.author().id;
    let data = ctx.data();

    data.timers.cancel(&TimerKey::new(
        TimerKind::Pomodoro,
        guild_id.get(),
        user_id.get(),
    ));

    let stopped = PomodoroService::new(&data.db)
        .stop(&guild_id.to_string(), &user_id.to_string())
        .await?;

    if !stopped {
        return Err(AppError::NotFound(NO_SESSION.to_string()));
    }

    ctx.say("Pomodoro session stopped.").await?;

    Ok(())
}

/// Change a setting of your pomodoro session from the next phase on
#[poise::command(slash_command, guild_only, rename = "pomodoro-edit")]
pub async fn pomodoro_edit(
    ctx: Context<'_>,
    #[description = "Setting to change"] field: PomodoroField,
    #[description = "New value"]
    #[min = 1]
    value: i32,
) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;

    let updated = PomodoroService::new(&ctx.data().db)
        .edit(
            &guild_id.to_string(),
            &ctx.author().id.to_string(),
            field,
            value,
        )
        .await?;

    if !updated {
        return Err(AppError::NotFound(NO_SESSION.to_string()));
    }

    ctx.say(format!("Updated {} to {}.", field.name(), value))
        .await?;

    Ok(())
}

fn session_embed(session: &PomodoroSession) -> CreateEmbed {
    let remaining = session
        .time_remaining(Utc::now())
        .map(format_remaining)
        .unwrap_or_else(|| "-".to_string());

    CreateEmbed::new()
        .title("Pomodoro session")
        .field("Session time", format!("{} min", session.session_minutes), true)
        .field("Break time", format!("{} min", session.break_minutes), true)
        .field(
            "Session",
            format!("{}/{}", session.current_session, session.total_sessions),
            true,
        )
        .field("Progress", format!("{:.2}%", session.progress_percent()), true)
        .field("State", session.state.label(), true)
        .field("Time remaining", remaining, true)
}

/// Discord short time markup, rendered in each reader's own time zone.
fn discord_time(at: chrono::DateTime<Utc>) -> String {
    format!("<t:{}:t>", at.timestamp())
}
