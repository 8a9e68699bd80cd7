pub use sea_orm_migration::prelude::*;

mod m20250105_000001_create_time_activity_table;
mod m20250105_000002_create_rollup_checkpoint_table;
mod m20250112_000003_create_camera_channel_table;
mod m20250112_000004_create_guild_settings_table;
mod m20250119_000005_create_pomodoro_session_table;
mod m20250126_000006_create_reaction_role_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250105_000001_create_time_activity_table::Migration),
            Box::new(m20250105_000002_create_rollup_checkpoint_table::Migration),
            Box::new(m20250112_000003_create_camera_channel_table::Migration),
            Box::new(m20250112_000004_create_guild_settings_table::Migration),
            Box::new(m20250119_000005_create_pomodoro_session_table::Migration),
            Box::new(m20250126_000006_create_reaction_role_table::Migration),
        ]
    }
}
