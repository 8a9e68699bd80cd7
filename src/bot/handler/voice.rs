//! Voice state event handler.
//!
//! Every voice update feeds two independent features: the session tracker, which credits
//! voice time on leave, and camera enforcement, which starts or cancels the member's grace
//! timer. A failure in one never skips the other.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, Context, GuildId, UserId, VoiceState},
    cache::Cache,
    http::Http,
};

use crate::{
    error::AppError,
    model::{
        camera::{camera_warning, CameraAction},
        time_activity::VoiceTransition,
    },
    service::{
        camera::CameraService,
        notifier::{DiscordNotifier, Notifier},
        timer::{TimerKey, TimerKind},
        voice_session::VoiceSessionService,
    },
    state::AppState,
};

/// Handles a voice state update of a guild member.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for the cache and HTTP client
/// - `old` - Cached previous voice state, `None` if the member was not in voice or not cached
/// - `new` - Voice state after the update
pub async fn handle_voice_state_update(
    state: &AppState,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };
    let user_id = new.user_id;

    let old_channel = old.as_ref().and_then(|voice| voice.channel_id);
    let transition = VoiceTransition::classify(old_channel, new.channel_id);

    track_voice_time(state, guild_id, user_id, transition).await;

    enforce_camera(state, &ctx, guild_id, user_id, new.channel_id, new.self_video).await;
}

async fn track_voice_time(
    state: &AppState,
    guild_id: GuildId,
    user_id: UserId,
    transition: VoiceTransition,
) {
    let server_id = guild_id.to_string();
    let member_id = user_id.to_string();

    match VoiceSessionService::new(&state.db)
        .handle_transition(&server_id, &member_id, transition, Utc::now())
        .await
    {
        Ok(Some(hours)) => tracing::info!(
            "User {} studied {:.2}h in guild {}",
            user_id,
            hours,
            guild_id
        ),
        Ok(None) => {}
        Err(e) => tracing::error!(
            "Failed to record voice {:?} of user {} in guild {}: {}",
            transition,
            user_id,
            guild_id,
            e
        ),
    }
}

async fn enforce_camera(
    state: &AppState,
    ctx: &Context,
    guild_id: GuildId,
    user_id: UserId,
    channel_id: Option<ChannelId>,
    self_video: bool,
) {
    let key = TimerKey::new(TimerKind::CameraGrace, guild_id.get(), user_id.get());
    let pending = state.timers.is_scheduled(&key);
    let channel = channel_id.map(|id| id.to_string());

    let action = match CameraService::new(&state.db)
        .evaluate(&guild_id.to_string(), channel.as_deref(), self_video, pending)
        .await
    {
        Ok(action) => action,
        Err(e) => {
            tracing::error!(
                "Failed to check camera rules for user {} in guild {}: {}",
                user_id,
                guild_id,
                e
            );
            return;
        }
    };

    match action {
        CameraAction::Schedule => {
            let db = state.db.clone();
            let cache = ctx.cache.clone();
            let http = ctx.http.clone();
            let grace = state.camera_grace;

            tracing::debug!(
                "User {} has {}s to turn on their camera in guild {}",
                user_id,
                grace.as_secs(),
                guild_id
            );

            state.timers.schedule(key, async move {
                tokio::time::sleep(grace).await;

                if let Err(e) = expire_grace(&db, &cache, &http, guild_id, user_id).await {
                    tracing::error!(
                        "Failed to enforce camera of user {} in guild {}: {}",
                        user_id,
                        guild_id,
                        e
                    );
                }
            });
        }
        CameraAction::Cancel => {
            if state.timers.cancel(&key) {
                tracing::debug!(
                    "Cancelled camera grace of user {} in guild {}",
                    user_id,
                    guild_id
                );
            }
        }
        CameraAction::Keep => {}
    }
}

/// Disconnects the member if they are still in a camera-only channel with the camera off.
async fn expire_grace(
    db: &DatabaseConnection,
    cache: &Arc<Cache>,
    http: &Arc<Http>,
    guild_id: GuildId,
    user_id: UserId,
) -> Result<(), AppError> {
    let current = cache.guild(guild_id).and_then(|guild| {
        guild
            .voice_states
            .get(&user_id)
            .map(|voice| (voice.channel_id, voice.self_video))
    });

    let Some((Some(channel_id), self_video)) = current else {
        return Ok(());
    };

    let server_id = guild_id.to_string();
    let service = CameraService::new(db);

    let action = service
        .evaluate(&server_id, Some(&channel_id.to_string()), self_video, false)
        .await?;

    if action != CameraAction::Schedule {
        return Ok(());
    }

    guild_id.disconnect_member(http, user_id).await?;

    tracing::info!(
        "Disconnected user {} from channel {} in guild {} for keeping the camera off",
        user_id,
        channel_id,
        guild_id
    );

    let settings = service.settings(&server_id).await?;

    if let Some(message_channel_id) = settings.message_channel_id {
        DiscordNotifier::new(http.clone())
            .notify(&message_channel_id, camera_warning(user_id.get()))
            .await?;
    }

    Ok(())
}
