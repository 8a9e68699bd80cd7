//! Rollup checkpoint repository.
//!
//! Stores, per rollup period, the instant its counter was last zeroed so that a restart can
//! tell whether a period boundary passed while the bot was offline.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::rollup::RollupPeriod;

pub struct RollupCheckpointRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RollupCheckpointRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the last reset instant of a period.
    ///
    /// # Returns
    /// - `Ok(Some(DateTime))` - The period has been reset or checkpointed before
    /// - `Ok(None)` - No checkpoint recorded yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, period: RollupPeriod) -> Result<Option<DateTime<Utc>>, DbErr> {
        let entity = entity::prelude::RollupCheckpoint::find_by_id(period.as_str().to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|checkpoint| checkpoint.last_reset_at))
    }

    /// Records `reset_at` as the period's last reset, replacing any previous checkpoint.
    pub async fn mark(&self, period: RollupPeriod, reset_at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::RollupCheckpoint::insert(entity::rollup_checkpoint::ActiveModel {
            period: ActiveValue::Set(period.as_str().to_string()),
            last_reset_at: ActiveValue::Set(reset_at),
        })
        .on_conflict(
            OnConflict::column(entity::rollup_checkpoint::Column::Period)
                .update_column(entity::rollup_checkpoint::Column::LastResetAt)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
