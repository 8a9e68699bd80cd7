use chrono::{Local, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{error::AppError, model::rollup::RollupPeriod, service::rollup::RollupService};

/// Starts the rollup scheduler
///
/// Registers one job per rollup period, each firing at local midnight on its boundary:
/// - Daily: every day
/// - Weekly: every Monday
/// - Monthly: the first day of every month
///
/// Each job logs its own failure; a failed reset waits for the next boundary (or the
/// startup catch-up) and never affects the other jobs.
///
/// # Arguments
/// - `db`: Database connection
///
/// # Returns
/// - `Ok(JobScheduler)` - The running scheduler; keep it alive for the jobs to fire
/// - `Err(AppError::SchedulerErr)` - A job failed to register or the scheduler to start
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    for period in RollupPeriod::ALL {
        let job_db = db.clone();

        let job = Job::new_async_tz(period.cron_expression(), Local, move |_uuid, _lock| {
            let db = job_db.clone();

            Box::pin(async move {
                if let Err(e) = RollupService::new(&db).reset(period, Utc::now()).await {
                    tracing::error!("Error resetting {} hours: {}", period, e);
                }
            })
        })?;

        scheduler.add(job).await?;
    }

    scheduler.start().await?;

    tracing::info!("Rollup scheduler started");

    Ok(scheduler)
}
