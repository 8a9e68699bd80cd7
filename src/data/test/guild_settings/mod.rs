use crate::data::guild_settings::GuildSettingsRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::guild_settings::GuildSettingsFactory};

mod get;
mod set_camera_tracking;
mod set_message_channel;
