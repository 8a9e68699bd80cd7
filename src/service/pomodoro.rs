//! Pomodoro timers.
//!
//! [`PomodoroService`] backs the slash commands and [`PomodoroRunner`] drives a configured
//! session through its focus and break phases. The runner is spawned through the
//! [`TimerRegistry`] so that stopping or reconfiguring a session aborts the previous runner.
//! Before every phase the runner re-reads the stored session: a deleted row ends it and
//! edited lengths apply from the next phase on.

use std::{sync::Arc, time::Duration};

use chrono::{DateTime, TimeDelta, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::pomodoro::PomodoroRepository,
    error::AppError,
    model::pomodoro::{PomodoroField, PomodoroSession, PomodoroState, StartPomodoroParam},
    service::{
        notifier::Notifier,
        timer::{TimerKey, TimerKind, TimerRegistry},
    },
};

pub struct PomodoroService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PomodoroService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a fresh idle session, replacing any previous one of the member.
    ///
    /// # Returns
    /// - `Ok(PomodoroSession)` - The stored session
    /// - `Err(AppError::BadRequest)` - A length or the session count is not positive
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn configure(
        &self,
        param: StartPomodoroParam,
        now: DateTime<Utc>,
    ) -> Result<PomodoroSession, AppError> {
        validate_positive("session-time", param.session_minutes)?;
        validate_positive("break-time", param.break_minutes)?;
        validate_positive("number-of-sessions", param.total_sessions)?;

        let repo = PomodoroRepository::new(self.db);

        repo.upsert(param, now).await
    }

    pub async fn get(
        &self,
        server_id: &str,
        user_id: &str,
    ) -> Result<Option<PomodoroSession>, AppError> {
        PomodoroRepository::new(self.db).find(server_id, user_id).await
    }

    /// Deletes the member's session.
    ///
    /// # Returns
    /// - `Ok(true)` - Session deleted
    /// - `Ok(false)` - The member had no session
    pub async fn stop(&self, server_id: &str, user_id: &str) -> Result<bool, AppError> {
        PomodoroRepository::new(self.db).delete(server_id, user_id).await
    }

    /// Changes one configured value; the running phase keeps its length.
    ///
    /// # Returns
    /// - `Ok(true)` - Value updated
    /// - `Ok(false)` - The member has no session
    /// - `Err(AppError::BadRequest)` - The value is not positive
    pub async fn edit(
        &self,
        server_id: &str,
        user_id: &str,
        field: PomodoroField,
        value: i32,
    ) -> Result<bool, AppError> {
        validate_positive(field_name(field), value)?;

        PomodoroRepository::new(self.db)
            .update_field(server_id, user_id, field, value)
            .await
    }

    /// Removes sessions whose runner died with the previous process.
    pub async fn clear_stale(&self) -> Result<u64, AppError> {
        let removed = PomodoroRepository::new(self.db).delete_all().await?;

        if removed > 0 {
            tracing::info!("Cleared {} stale pomodoro sessions", removed);
        }

        Ok(removed)
    }
}

fn field_name(field: PomodoroField) -> &'static str {
    match field {
        PomodoroField::SessionTime => "session-time",
        PomodoroField::BreakTime => "break-time",
        PomodoroField::NumberOfSessions => "number-of-sessions",
    }
}

fn validate_positive(name: &str, value: i32) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::BadRequest(format!(
            "{} must be greater than 0.",
            name
        )));
    }

    Ok(())
}

/// Drives one member's session through its phases.
pub struct PomodoroRunner<N> {
    db: DatabaseConnection,
    notifier: N,
    /// Real time length of one configured minute.
    minute: Duration,
}

impl<N: Notifier + 'static> PomodoroRunner<N> {
    pub fn new(db: DatabaseConnection, notifier: N, minute: Duration) -> Self {
        Self {
            db,
            notifier,
            minute,
        }
    }

    /// Spawns the runner under the member's pomodoro timer key, replacing a running one.
    pub fn spawn(self, timers: &Arc<TimerRegistry>, guild_id: u64, user_id: u64) {
        let key = TimerKey::new(TimerKind::Pomodoro, guild_id, user_id);

        timers.schedule(key, async move {
            let server_id = guild_id.to_string();
            let user_id = user_id.to_string();

            if let Err(e) = self.run(&server_id, &user_id).await {
                tracing::error!(
                    "Pomodoro runner for user {} in guild {} failed: {}",
                    user_id,
                    server_id,
                    e
                );
            }
        });
    }

    /// Runs every session of the member's stored configuration.
    ///
    /// # Returns
    /// - `Ok(())` - All sessions finished, or the session was stopped
    /// - `Err(AppError)` - Database error reading or persisting a phase
    pub async fn run(&self, server_id: &str, user_id: &str) -> Result<(), AppError> {
        let repo = PomodoroRepository::new(&self.db);
        let mut number = 1;

        loop {
            let Some(session) = repo.find(server_id, user_id).await? else {
                return Ok(());
            };

            if number > session.total_sessions {
                break;
            }

            let focus = self.phase_length(session.session_minutes);
            if !repo
                .advance(
                    server_id,
                    user_id,
                    number,
                    PomodoroState::Focus,
                    Some(phase_end(focus)),
                )
                .await?
            {
                return Ok(());
            }

            self.announce(
                &session.channel_id,
                format!(
                    "Session {}/{} started! Focus!",
                    number, session.total_sessions
                ),
            )
            .await;

            tokio::time::sleep(focus).await;

            let Some(session) = repo.find(server_id, user_id).await? else {
                return Ok(());
            };

            self.announce(
                &session.channel_id,
                format!("Session {} over! Take a break!", number),
            )
            .await;

            if session.is_last_session(number) {
                break;
            }

            let rest = self.phase_length(session.break_minutes);
            if !repo
                .advance(
                    server_id,
                    user_id,
                    number,
                    PomodoroState::Break,
                    Some(phase_end(rest)),
                )
                .await?
            {
                return Ok(());
            }

            tokio::time::sleep(rest).await;

            number += 1;
        }

        let Some(session) = repo.find(server_id, user_id).await? else {
            return Ok(());
        };

        repo.delete(server_id, user_id).await?;

        self.announce(&session.channel_id, "Pomodoro sessions are over!".to_string())
            .await;

        tracing::debug!(
            "Pomodoro sessions of user {} in guild {} finished",
            user_id,
            server_id
        );

        Ok(())
    }

    fn phase_length(&self, minutes: i32) -> Duration {
        self.minute * minutes.max(0) as u32
    }

    async fn announce(&self, channel_id: &str, content: String) {
        if let Err(e) = self.notifier.notify(channel_id, content).await {
            tracing::warn!("Failed to post pomodoro update to {}: {}", channel_id, e);
        }
    }
}

fn phase_end(length: Duration) -> DateTime<Utc> {
    Utc::now() + TimeDelta::from_std(length).unwrap_or(TimeDelta::zero())
}
