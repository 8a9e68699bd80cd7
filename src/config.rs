use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

/// Grace period before a member without a camera is disconnected.
const DEFAULT_CAMERA_GRACE_SECONDS: u64 = 60;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// How long a member may sit in an enforced channel with the camera off.
    pub camera_grace: Duration,
    /// Whether rollups missed while the bot was offline are applied at startup.
    pub rollup_catch_up: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let camera_grace_seconds = match lookup("CAMERA_GRACE_SECONDS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "CAMERA_GRACE_SECONDS".to_string(),
                    value,
                })?,
            None => DEFAULT_CAMERA_GRACE_SECONDS,
        };

        let rollup_catch_up = match lookup("ROLLUP_CATCH_UP") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidEnvVar {
                name: "ROLLUP_CATCH_UP".to_string(),
                value,
            })?,
            None => true,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            camera_grace: Duration::from_secs(camera_grace_seconds),
            rollup_catch_up,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
