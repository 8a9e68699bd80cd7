//! Camera enforcement in voice channels.
//!
//! Guild admins mark voice channels as camera-only. Each voice update of a member is turned
//! into a [`CameraAction`] for their grace timer; the timer itself and the disconnect it ends
//! with live in the voice event handler, which has access to the gateway cache.

use sea_orm::DatabaseConnection;

use crate::{
    data::{camera::CameraRepository, guild_settings::GuildSettingsRepository},
    error::AppError,
    model::camera::{CameraAction, CameraCheck, GuildSettings},
};

pub struct CameraService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CameraService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a voice channel as camera-only.
    ///
    /// # Returns
    /// - `Ok(true)` - Channel added
    /// - `Ok(false)` - Channel was already camera-only
    pub async fn add_channel(&self, server_id: &str, channel_id: &str) -> Result<bool, AppError> {
        let added = CameraRepository::new(self.db)
            .add(server_id, channel_id)
            .await?;

        if added {
            tracing::info!("Enforcing cameras in channel {} of guild {}", channel_id, server_id);
        }

        Ok(added)
    }

    /// Removes a voice channel from the camera-only set.
    ///
    /// # Returns
    /// - `Ok(true)` - Channel removed
    /// - `Ok(false)` - Channel was not camera-only
    pub async fn remove_channel(
        &self,
        server_id: &str,
        channel_id: &str,
    ) -> Result<bool, AppError> {
        let removed = CameraRepository::new(self.db)
            .remove(server_id, channel_id)
            .await?;

        if removed {
            tracing::info!(
                "Stopped enforcing cameras in channel {} of guild {}",
                channel_id,
                server_id
            );
        }

        Ok(removed)
    }

    pub async fn set_message_channel(
        &self,
        server_id: &str,
        channel_id: &str,
    ) -> Result<(), AppError> {
        GuildSettingsRepository::new(self.db)
            .set_message_channel(server_id, channel_id)
            .await?;

        Ok(())
    }

    pub async fn set_tracking(&self, server_id: &str, enabled: bool) -> Result<(), AppError> {
        GuildSettingsRepository::new(self.db)
            .set_camera_tracking(server_id, enabled)
            .await?;

        tracing::info!(
            "Camera tracking {} for guild {}",
            if enabled { "enabled" } else { "disabled" },
            server_id
        );

        Ok(())
    }

    pub async fn settings(&self, server_id: &str) -> Result<GuildSettings, AppError> {
        Ok(GuildSettingsRepository::new(self.db).get(server_id).await?)
    }

    /// Decides what to do with a member's grace timer after a voice update.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID
    /// - `channel_id` - The member's current voice channel, `None` after leaving voice
    /// - `self_video` - Whether the member's camera is on
    /// - `timer_pending` - Whether a grace timer is already running for the member
    pub async fn evaluate(
        &self,
        server_id: &str,
        channel_id: Option<&str>,
        self_video: bool,
        timer_pending: bool,
    ) -> Result<CameraAction, AppError> {
        let Some(channel_id) = channel_id else {
            return Ok(CameraAction::Cancel);
        };

        let in_enforced_channel = CameraRepository::new(self.db)
            .is_enforced(server_id, channel_id)
            .await?;

        // Only look up settings when the channel matters.
        let tracking_enabled = in_enforced_channel && self.settings(server_id).await?.camera_tracking;

        Ok(CameraCheck {
            in_enforced_channel,
            tracking_enabled,
            self_video,
            timer_pending,
        }
        .action())
    }
}
