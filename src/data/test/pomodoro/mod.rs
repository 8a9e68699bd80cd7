use crate::{
    data::pomodoro::PomodoroRepository,
    error::AppError,
    model::pomodoro::{PomodoroField, PomodoroState, StartPomodoroParam},
};
use chrono::{TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory::pomodoro_session::PomodoroSessionFactory};

mod advance;
mod delete;
mod find;
mod update_field;
mod upsert;

fn start_param(server_id: &str, user_id: &str) -> StartPomodoroParam {
    StartPomodoroParam {
        server_id: server_id.to_string(),
        user_id: user_id.to_string(),
        channel_id: "C1".to_string(),
        session_minutes: 50,
        break_minutes: 10,
        total_sessions: 3,
    }
}
