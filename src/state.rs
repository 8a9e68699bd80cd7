//! Application state shared across event handlers and slash commands.
//!
//! The state is created once at startup. Poise hands it to every command as user data and
//! the serenity event handler keeps its own clone; all fields are cheap to clone and share
//! the same underlying pool and registry.

use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::service::timer::TimerRegistry;

/// Real time length of one pomodoro minute.
pub const POMODORO_MINUTE: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Pending pomodoro runners and camera grace periods.
    pub timers: Arc<TimerRegistry>,

    /// How long a member may keep the camera off in an enforced channel.
    pub camera_grace: Duration,
}

impl AppState {
    pub fn new(db: DatabaseConnection, camera_grace: Duration) -> Self {
        Self {
            db,
            timers: Arc::new(TimerRegistry::new()),
            camera_grace,
        }
    }
}
