//! Domain models for camera enforcement in voice channels.

/// Per-guild settings shared by the camera enforcement commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSettings {
    pub server_id: String,
    /// Text channel where camera warnings are posted.
    pub message_channel_id: Option<String>,
    /// Whether camera enforcement is active for the guild.
    pub camera_tracking: bool,
}

impl GuildSettings {
    /// Settings used for guilds that never ran a settings command.
    pub fn defaults(server_id: impl Into<String>) -> Self {
        Self {
            server_id: server_id.into(),
            message_channel_id: None,
            camera_tracking: true,
        }
    }

    pub fn from_entity(entity: entity::guild_settings::Model) -> Self {
        Self {
            server_id: entity.server_id,
            message_channel_id: entity.message_channel_id,
            camera_tracking: entity.camera_tracking,
        }
    }
}

/// What a voice update means for a member's camera grace timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAction {
    /// Start the grace timer.
    Schedule,
    /// Drop any pending grace timer.
    Cancel,
    /// Leave the pending timer running.
    Keep,
}

/// Inputs to the camera decision for a single voice update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraCheck {
    /// The member's current channel is in the enforced set.
    pub in_enforced_channel: bool,
    /// Enforcement is enabled for the guild.
    pub tracking_enabled: bool,
    /// The member's camera is on.
    pub self_video: bool,
    /// A grace timer is already pending for the member.
    pub timer_pending: bool,
}

impl CameraCheck {
    pub fn action(&self) -> CameraAction {
        let violating = self.in_enforced_channel && self.tracking_enabled && !self.self_video;

        match (violating, self.timer_pending) {
            (true, true) => CameraAction::Keep,
            (true, false) => CameraAction::Schedule,
            (false, _) => CameraAction::Cancel,
        }
    }
}

/// Warning posted after a member is disconnected for keeping the camera off.
pub fn camera_warning(user_id: u64) -> String {
    format!("Hey <@{}>, please turn on your camera!", user_id)
}
