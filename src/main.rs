mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    scheduler::rollup::start_scheduler,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::recover_state(&db, &config).await?;

    let _scheduler = start_scheduler(db.clone()).await?;

    tracing::info!("Starting bot");

    let state = AppState::new(db, config.camera_grace);
    let client = init_bot(&config, state).await?;

    start_bot(client).await
}
