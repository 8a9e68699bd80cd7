//! Database repository layer for all domain entities.
//!
//! Repositories wrap a borrowed `DatabaseConnection` and perform the queries, inserts,
//! updates and deletes for one table each. Entity models are converted to domain models
//! here so services never touch SeaORM types directly.

pub mod camera;
pub mod guild_settings;
pub mod pomodoro;
pub mod reaction_role;
pub mod rollup_checkpoint;
pub mod time_activity;

#[cfg(test)]
mod test;
