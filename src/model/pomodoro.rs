//! Domain models for pomodoro timers.

use chrono::{DateTime, Duration, Utc};

use crate::error::internal::InternalError;

/// Phase a pomodoro session is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PomodoroState {
    /// Configured but the first focus phase has not begun.
    Idle,
    Focus,
    Break,
}

impl PomodoroState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Focus => "focus",
            Self::Break => "break",
        }
    }

    /// Parses the stored `current_state` column.
    ///
    /// # Returns
    /// - `Ok(PomodoroState)` - Known state
    /// - `Err(InternalError::UnknownPomodoroState)` - Column holds an unrecognized value
    pub fn parse(value: &str) -> Result<Self, InternalError> {
        match value {
            "idle" => Ok(Self::Idle),
            "focus" => Ok(Self::Focus),
            "break" => Ok(Self::Break),
            other => Err(InternalError::UnknownPomodoroState(other.to_string())),
        }
    }

    /// Label shown in `/session-info`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }
}

/// Column targeted by `/pomodoro-edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum PomodoroField {
    #[name = "session-time"]
    SessionTime,
    #[name = "break-time"]
    BreakTime,
    #[name = "number-of-sessions"]
    NumberOfSessions,
}

/// A member's pomodoro timer configuration and progress.
#[derive(Debug, Clone, PartialEq)]
pub struct PomodoroSession {
    pub server_id: String,
    pub user_id: String,
    /// Text channel the phase announcements are posted to.
    pub channel_id: String,
    pub session_minutes: i32,
    pub break_minutes: i32,
    pub total_sessions: i32,
    /// 1-based index of the running session, 0 while idle.
    pub current_session: i32,
    pub state: PomodoroState,
    /// End of the running phase, `None` while idle.
    pub phase_ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl PomodoroSession {
    /// Converts an entity model to a pomodoro session at the repository boundary.
    pub fn from_entity(entity: entity::pomodoro_session::Model) -> Result<Self, InternalError> {
        Ok(Self {
            state: PomodoroState::parse(&entity.current_state)?,
            server_id: entity.server_id,
            user_id: entity.user_id,
            channel_id: entity.channel_id,
            session_minutes: entity.session_minutes,
            break_minutes: entity.break_minutes,
            total_sessions: entity.total_sessions,
            current_session: entity.current_session,
            phase_ends_at: entity.phase_ends_at,
            created_at: entity.created_at,
        })
    }

    /// Completed share of the configured sessions, in percent.
    pub fn progress_percent(&self) -> f64 {
        if self.total_sessions <= 0 {
            return 0.0;
        }

        self.current_session as f64 / self.total_sessions as f64 * 100.0
    }

    /// Time left in the running phase, `None` while idle.
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.phase_ends_at
            .map(|ends_at| (ends_at - now).max(Duration::zero()))
    }

    pub fn is_last_session(&self, session: i32) -> bool {
        session >= self.total_sessions
    }
}

/// Parameters for `/pomodoro-set`.
#[derive(Debug, Clone, PartialEq)]
pub struct StartPomodoroParam {
    pub server_id: String,
    pub user_id: String,
    pub channel_id: String,
    pub session_minutes: i32,
    pub break_minutes: i32,
    pub total_sessions: i32,
}

impl StartPomodoroParam {
    /// When every session and break would be done if started at `start`.
    pub fn estimated_completion(&self, start: DateTime<Utc>) -> DateTime<Utc> {
        let per_session = (self.session_minutes + self.break_minutes) as i64;

        start + Duration::minutes(per_session * self.total_sessions as i64)
    }
}

/// Formats a duration as `HH:MM:SS`.
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);

    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
