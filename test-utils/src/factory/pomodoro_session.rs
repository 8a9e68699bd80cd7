//! Pomodoro session factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating pomodoro session rows.
///
/// Defaults to an idle 25/5 session with 4 rounds.
pub struct PomodoroSessionFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    user_id: String,
    channel_id: String,
    session_minutes: i32,
    break_minutes: i32,
    total_sessions: i32,
    current_session: i32,
    current_state: String,
}

impl<'a> PomodoroSessionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            server_id: next_id().to_string(),
            user_id: next_id().to_string(),
            channel_id: next_id().to_string(),
            session_minutes: 25,
            break_minutes: 5,
            total_sessions: 4,
            current_session: 0,
            current_state: "idle".to_string(),
        }
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn total_sessions(mut self, total: i32) -> Self {
        self.total_sessions = total;
        self
    }

    pub fn current_session(mut self, current: i32) -> Self {
        self.current_session = current;
        self
    }

    pub fn current_state(mut self, state: impl Into<String>) -> Self {
        self.current_state = state.into();
        self
    }

    pub async fn build(self) -> Result<entity::pomodoro_session::Model, DbErr> {
        entity::pomodoro_session::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            user_id: ActiveValue::Set(self.user_id),
            channel_id: ActiveValue::Set(self.channel_id),
            session_minutes: ActiveValue::Set(self.session_minutes),
            break_minutes: ActiveValue::Set(self.break_minutes),
            total_sessions: ActiveValue::Set(self.total_sessions),
            current_session: ActiveValue::Set(self.current_session),
            current_state: ActiveValue::Set(self.current_state),
            phase_ends_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an idle pomodoro session with default values.
pub async fn create_pomodoro_session(
    db: &DatabaseConnection,
) -> Result<entity::pomodoro_session::Model, DbErr> {
    PomodoroSessionFactory::new(db).build().await
}
