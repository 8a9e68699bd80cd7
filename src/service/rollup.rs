//! Periodic resets of the daily, weekly and monthly counters.
//!
//! The cron jobs in [`crate::scheduler::rollup`] call [`RollupService::reset`] at every
//! period boundary. [`RollupService::catch_up`] runs once at startup and performs the resets
//! whose boundary passed while the bot was offline, using the per-period checkpoint written
//! by every successful reset.

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{rollup_checkpoint::RollupCheckpointRepository, time_activity::TimeActivityRepository},
    error::AppError,
    model::rollup::RollupPeriod,
};

pub struct RollupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RollupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Zeroes the period's counter across all servers and records the checkpoint.
    ///
    /// Both writes share one transaction: a reset is never committed without its checkpoint,
    /// so a later catch-up cannot zero the counter a second time.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records reset
    /// - `Err(AppError::DbErr)` - The reset or the checkpoint write failed, nothing changed
    pub async fn reset(&self, period: RollupPeriod, now: DateTime<Utc>) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        let updated = TimeActivityRepository::new(&txn).reset(period).await?;

        RollupCheckpointRepository::new(&txn)
            .mark(period, now)
            .await?;

        txn.commit().await?;

        tracing::info!("Reset {} hours of {} members", period, updated);

        Ok(updated)
    }

    /// Performs the resets missed while the bot was offline.
    ///
    /// For each period, the most recent boundary at or before `now` (in `now`'s time zone)
    /// is compared with the period's checkpoint. A checkpoint older than the boundary means
    /// the reset was missed and it runs now. A period without a checkpoint only gets one
    /// recorded, so a fresh install never wipes imported data. Each period is handled on its
    /// own: a failure is logged and the remaining periods still run.
    ///
    /// # Returns
    /// - The periods that were reset
    pub async fn catch_up<Tz: TimeZone>(&self, now: DateTime<Tz>) -> Vec<RollupPeriod> {
        let mut reset = Vec::new();

        for period in RollupPeriod::ALL {
            match self.catch_up_period(period, &now).await {
                Ok(true) => reset.push(period),
                Ok(false) => {}
                Err(e) => tracing::error!("Failed to catch up {} rollup: {}", period, e),
            }
        }

        reset
    }

    async fn catch_up_period<Tz: TimeZone>(
        &self,
        period: RollupPeriod,
        now: &DateTime<Tz>,
    ) -> Result<bool, AppError> {
        let checkpoints = RollupCheckpointRepository::new(self.db);
        let now_utc = now.with_timezone(&Utc);

        let Some(last_reset) = checkpoints.get(period).await? else {
            checkpoints.mark(period, now_utc).await?;
            tracing::debug!("Recorded first {} rollup checkpoint", period);
            return Ok(false);
        };

        let Some(boundary) = period.last_boundary(now) else {
            tracing::warn!("No local midnight for {} rollup at {}", period, now_utc);
            return Ok(false);
        };

        if last_reset >= boundary.with_timezone(&Utc) {
            return Ok(false);
        }

        tracing::info!(
            "Missed {} rollup since {}, resetting now",
            period,
            last_reset
        );

        self.reset(period, now_utc).await?;

        Ok(true)
    }
}
