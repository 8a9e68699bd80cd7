use chrono::Local;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::AppError,
    service::{pomodoro::PomodoroService, rollup::RollupService},
};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the bot can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Brings persisted state in line with a freshly started process.
///
/// Pomodoro sessions whose runner died with the previous process are removed, and, when
/// enabled, rollups whose boundary passed while the bot was offline are applied.
pub async fn recover_state(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    PomodoroService::new(db).clear_stale().await?;

    if config.rollup_catch_up {
        let reset = RollupService::new(db).catch_up(Local::now()).await;

        if !reset.is_empty() {
            tracing::info!("Caught up {} missed rollups", reset.len());
        }
    }

    Ok(())
}
