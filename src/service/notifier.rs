//! Channel announcements posted by background tasks.

use std::sync::Arc;

use serenity::{all::CreateMessage, http::Http};

use crate::{error::AppError, util::parse::parse_channel_id};

/// Posts plain text messages to a channel.
///
/// Background runners post through this trait instead of an `Http` client so they can be
/// driven in tests without a gateway connection.
#[serenity::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, channel_id: &str, content: String) -> Result<(), AppError>;
}

/// Notifier posting through the bot's Discord HTTP client.
#[derive(Clone)]
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[serenity::async_trait]
impl Notifier for DiscordNotifier {
    async fn notify(&self, channel_id: &str, content: String) -> Result<(), AppError> {
        let channel_id = parse_channel_id(channel_id)?;

        channel_id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }
}
