//! Session tracking for voice time accounting.
//!
//! Turns gateway voice transitions into store updates: a join opens a session, a leave
//! closes it and credits the elapsed hours to every counter. Moves between channels keep the
//! session open so a member studying across several rooms is credited once, on the final
//! leave.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::time_activity::TimeActivityRepository,
    error::AppError,
    model::time_activity::{elapsed_hours, VoiceTransition},
};

pub struct VoiceSessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoiceSessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies one voice transition for a member at `now`.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `transition` - Classified voice update
    /// - `now` - Instant the update was observed
    ///
    /// # Returns
    /// - `Ok(Some(hours))` - A leave credited `hours` to the member
    /// - `Ok(None)` - Nothing was credited (join, move, no-op leave, empty ids)
    /// - `Err(AppError::DbErr)` - Store error; the update is lost
    pub async fn handle_transition(
        &self,
        server_id: &str,
        user_id: &str,
        transition: VoiceTransition,
        now: DateTime<Utc>,
    ) -> Result<Option<f64>, AppError> {
        if server_id.is_empty() || user_id.is_empty() {
            return Ok(None);
        }

        match transition {
            VoiceTransition::Join => {
                self.record_join(server_id, user_id, now).await?;

                Ok(None)
            }
            VoiceTransition::Leave => self.record_leave(server_id, user_id, now).await,
            VoiceTransition::Move | VoiceTransition::Unchanged | VoiceTransition::NotInVoice => {
                Ok(None)
            }
        }
    }

    /// Opens a session for the member, overwriting any open one.
    pub async fn record_join(
        &self,
        server_id: &str,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let repo = TimeActivityRepository::new(self.db);

        repo.record_join(server_id, user_id, now).await?;

        tracing::debug!("User {} joined voice in guild {}", user_id, server_id);

        Ok(())
    }

    /// Closes the member's open session and credits the elapsed hours.
    ///
    /// A leave without an open session (bot started while the member was already in voice,
    /// or a duplicated event) changes nothing.
    pub async fn record_leave(
        &self,
        server_id: &str,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<f64>, AppError> {
        let repo = TimeActivityRepository::new(self.db);

        let Some(join_time) = repo.join_time(server_id, user_id).await? else {
            tracing::debug!(
                "Ignoring leave of user {} in guild {} without an open session",
                user_id,
                server_id
            );
            return Ok(None);
        };

        let hours = elapsed_hours(join_time, now);

        repo.add_elapsed(server_id, user_id, hours, now).await?;

        tracing::debug!(
            "Credited {:.4}h to user {} in guild {}",
            hours,
            user_id,
            server_id
        );

        Ok(Some(hours))
    }
}
