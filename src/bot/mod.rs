//! Discord gateway integration.
//!
//! One serenity client carries both halves of the bot: the poise framework registers and
//! dispatches the slash commands in [`command`], and the raw [`handler::Handler`] receives
//! the gateway events that drive voice time tracking, camera enforcement, reaction roles and
//! the greeting reply. Both share the same [`crate::state::AppState`].
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild data and the cached voice states
//! - `GUILD_MESSAGES` - Messages in guild channels
//! - `MESSAGE_CONTENT` - Message text for the greeting reply (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice joins, leaves, moves and camera toggles
//! - `GUILD_MESSAGE_REACTIONS` - Reactions on reaction role messages
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled in the
//! Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
