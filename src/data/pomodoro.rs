//! Pomodoro session data repository.
//!
//! One row per (server, user) holds the timer configuration and the phase it is in. The
//! runner re-reads the row before every phase, so edits and deletions made here through the
//! commands take effect at the next phase boundary.

use chrono::{DateTime, Utc};
use migration::{Expr, OnConflict};
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    error::AppError,
    model::pomodoro::{PomodoroField, PomodoroSession, PomodoroState, StartPomodoroParam},
};

/// Repository providing database operations for pomodoro sessions.
pub struct PomodoroRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PomodoroRepository<'a> {
    /// Creates a new PomodoroRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PomodoroRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or replaces the member's session with a fresh idle one.
    ///
    /// # Arguments
    /// - `param` - Timer configuration and the channel announcements go to
    /// - `now` - Creation timestamp
    ///
    /// # Returns
    /// - `Ok(PomodoroSession)` - The stored idle session
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        param: StartPomodoroParam,
        now: DateTime<Utc>,
    ) -> Result<PomodoroSession, AppError> {
        use entity::pomodoro_session::Column;

        let entity = entity::prelude::PomodoroSession::insert(
            entity::pomodoro_session::ActiveModel {
                server_id: ActiveValue::Set(param.server_id),
                user_id: ActiveValue::Set(param.user_id),
                channel_id: ActiveValue::Set(param.channel_id),
                session_minutes: ActiveValue::Set(param.session_minutes),
                break_minutes: ActiveValue::Set(param.break_minutes),
                total_sessions: ActiveValue::Set(param.total_sessions),
                current_session: ActiveValue::Set(0),
                current_state: ActiveValue::Set(PomodoroState::Idle.as_str().to_string()),
                phase_ends_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
            },
        )
        .on_conflict(
            OnConflict::columns([Column::ServerId, Column::UserId])
                .update_columns([
                    Column::ChannelId,
                    Column::SessionMinutes,
                    Column::BreakMinutes,
                    Column::TotalSessions,
                    Column::CurrentSession,
                    Column::CurrentState,
                    Column::PhaseEndsAt,
                    Column::CreatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(PomodoroSession::from_entity(entity)?)
    }

    /// Finds the member's session.
    ///
    /// # Returns
    /// - `Ok(Some(PomodoroSession))` - A session is configured
    /// - `Ok(None)` - No session, or it was stopped
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - Stored state is not a known phase
    pub async fn find(
        &self,
        server_id: &str,
        user_id: &str,
    ) -> Result<Option<PomodoroSession>, AppError> {
        let entity = entity::prelude::PomodoroSession::find_by_id((
            server_id.to_string(),
            user_id.to_string(),
        ))
        .one(self.db)
        .await?;

        Ok(entity.map(PomodoroSession::from_entity).transpose()?)
    }

    /// Moves the session into a new phase.
    ///
    /// # Returns
    /// - `Ok(true)` - Phase persisted
    /// - `Ok(false)` - The session no longer exists
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn advance(
        &self,
        server_id: &str,
        user_id: &str,
        session: i32,
        state: PomodoroState,
        phase_ends_at: Option<DateTime<Utc>>,
    ) -> Result<bool, AppError> {
        use entity::pomodoro_session::Column;

        let result = entity::prelude::PomodoroSession::update_many()
            .col_expr(Column::CurrentSession, Expr::value(session))
            .col_expr(Column::CurrentState, Expr::value(state.as_str()))
            .col_expr(Column::PhaseEndsAt, Expr::value(phase_ends_at))
            .filter(Column::ServerId.eq(server_id))
            .filter(Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Updates one configuration column of the session.
    ///
    /// # Returns
    /// - `Ok(true)` - Column updated
    /// - `Ok(false)` - No session exists for the member
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_field(
        &self,
        server_id: &str,
        user_id: &str,
        field: PomodoroField,
        value: i32,
    ) -> Result<bool, AppError> {
        use entity::pomodoro_session::Column;

        let column = match field {
            PomodoroField::SessionTime => Column::SessionMinutes,
            PomodoroField::BreakTime => Column::BreakMinutes,
            PomodoroField::NumberOfSessions => Column::TotalSessions,
        };

        let result = entity::prelude::PomodoroSession::update_many()
            .col_expr(column, Expr::value(value))
            .filter(Column::ServerId.eq(server_id))
            .filter(Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes the member's session.
    ///
    /// # Returns
    /// - `Ok(true)` - Session deleted
    /// - `Ok(false)` - There was no session to delete
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, server_id: &str, user_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::PomodoroSession::delete_by_id((
            server_id.to_string(),
            user_id.to_string(),
        ))
        .exec(self.db)
        .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every session.
    ///
    /// Runners do not survive a restart, so rows left by a previous process are stale.
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let result = entity::prelude::PomodoroSession::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
