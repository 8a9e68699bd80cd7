use poise::CreateReply;
use serenity::all::{CreateEmbed, User};

use crate::{
    bot::command::{require_guild, Context},
    error::AppError,
    model::time_activity::StatsSnapshot,
    service::stats::StatsService,
};

/// Show your study time in this server
#[poise::command(slash_command, guild_only, rename = "study-stats")]
pub async fn study_stats(ctx: Context<'_>) -> Result<(), AppError> {
    let user = ctx.author().clone();

    reply_with_stats(ctx, &user).await
}

/// Show the study time of another member
#[poise::command(slash_command, guild_only, rename = "study-stats-of-user")]
pub async fn study_stats_of_user(
    ctx: Context<'_>,
    #[description = "Member to look up"] target: User,
) -> Result<(), AppError> {
    reply_with_stats(ctx, &target).await
}

async fn reply_with_stats(ctx: Context<'_>, user: &User) -> Result<(), AppError> {
    let guild_id = require_guild(ctx)?;

    let snapshot = StatsService::new(&ctx.data().db)
        .snapshot(&guild_id.to_string(), &user.id.to_string())
        .await?
        .unwrap_or_else(StatsSnapshot::empty);

    ctx.send(CreateReply::default().embed(stats_embed(&user.name, &snapshot)))
        .await?;

    Ok(())
}

fn stats_embed(name: &str, snapshot: &StatsSnapshot) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("Study stats of {}", name))
        .field("Daily", format_hours(snapshot.daily_hours), true)
        .field("Weekly", format_hours(snapshot.weekly_hours), true)
        .field("Monthly", format_hours(snapshot.monthly_hours), true)
        .field("All-time", format_hours(snapshot.all_time_hours), true)
        .field(
            "Avg. Time (Monthly)",
            format_hours(snapshot.average_hours_per_day),
            true,
        )
}

fn format_hours(hours: f64) -> String {
    format!("{:.2}h", hours)
}
