//! Time activity data repository for voice time accounting.
//!
//! This module provides the `TimeActivityRepository`, the only code that reads or writes the
//! `time_activity` table. Every mutation is a single statement: joins and leaves are
//! `INSERT ... ON CONFLICT DO UPDATE` upserts keyed on (server_id, user_id), and rollups are
//! blanket `UPDATE` statements, so concurrent events for different members never contend and
//! a leave's contribution lands in all four counters or in none.

use chrono::{DateTime, Utc};
use migration::{Expr, OnConflict};
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::{rollup::RollupPeriod, time_activity::SessionRecord};

/// Repository providing database operations for per-member voice time.
pub struct TimeActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimeActivityRepository<'a, C> {
    /// Creates a new TimeActivityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or an open transaction
    ///
    /// # Returns
    /// - `TimeActivityRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks the member as in voice from `join_time`.
    ///
    /// Creates the record with zeroed counters on the member's first join. An existing
    /// record only has its `join_time` overwritten; a repeated join restarts the open
    /// session rather than failing.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `join_time` - Instant the member entered voice
    ///
    /// # Returns
    /// - `Ok(())` - Record created or join time overwritten
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn record_join(
        &self,
        server_id: &str,
        user_id: &str,
        join_time: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::TimeActivity::insert(entity::time_activity::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            join_time: ActiveValue::Set(Some(join_time)),
            leave_time: ActiveValue::Set(None),
            daily_hours: ActiveValue::Set(Some(0.0)),
            weekly_hours: ActiveValue::Set(Some(0.0)),
            monthly_hours: ActiveValue::Set(Some(0.0)),
            all_time_hours: ActiveValue::Set(Some(0.0)),
        })
        .on_conflict(
            OnConflict::columns([
                entity::time_activity::Column::ServerId,
                entity::time_activity::Column::UserId,
            ])
            .update_column(entity::time_activity::Column::JoinTime)
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Finds the record for a member.
    ///
    /// # Returns
    /// - `Ok(Some(SessionRecord))` - The member has joined voice at least once
    /// - `Ok(None)` - No record exists for the pair
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, server_id: &str, user_id: &str) -> Result<Option<SessionRecord>, DbErr> {
        let entity =
            entity::prelude::TimeActivity::find_by_id((server_id.to_string(), user_id.to_string()))
                .one(self.db)
                .await?;

        Ok(entity.map(SessionRecord::from_entity))
    }

    /// Reads the start of the member's open session.
    ///
    /// # Returns
    /// - `Ok(Some(DateTime))` - The member is tracked as in voice since this instant
    /// - `Ok(None)` - No record, or the record has no open session
    /// - `Err(DbErr)` - Database error during query
    pub async fn join_time(
        &self,
        server_id: &str,
        user_id: &str,
    ) -> Result<Option<DateTime<Utc>>, DbErr> {
        Ok(self
            .find(server_id, user_id)
            .await?
            .and_then(|record| record.join_time))
    }

    /// Folds a finished session into all four counters.
    ///
    /// One statement: an existing row gets `elapsed_hours` added to each counter (null
    /// counters count as zero), `leave_time` set and `join_time` cleared; a missing row is
    /// inserted with every counter equal to `elapsed_hours`.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `elapsed_hours` - Non-negative session length in hours
    /// - `leave_time` - Instant the member left voice
    ///
    /// # Returns
    /// - `Ok(())` - Counters updated
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn add_elapsed(
        &self,
        server_id: &str,
        user_id: &str,
        elapsed_hours: f64,
        leave_time: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        use entity::time_activity::Column;

        entity::prelude::TimeActivity::insert(entity::time_activity::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            join_time: ActiveValue::Set(None),
            leave_time: ActiveValue::Set(Some(leave_time)),
            daily_hours: ActiveValue::Set(Some(elapsed_hours)),
            weekly_hours: ActiveValue::Set(Some(elapsed_hours)),
            monthly_hours: ActiveValue::Set(Some(elapsed_hours)),
            all_time_hours: ActiveValue::Set(Some(elapsed_hours)),
        })
        .on_conflict(
            OnConflict::columns([Column::ServerId, Column::UserId])
                .value(
                    Column::DailyHours,
                    Expr::cust_with_values("COALESCE(\"daily_hours\", 0) + ?", [elapsed_hours]),
                )
                .value(
                    Column::WeeklyHours,
                    Expr::cust_with_values("COALESCE(\"weekly_hours\", 0) + ?", [elapsed_hours]),
                )
                .value(
                    Column::MonthlyHours,
                    Expr::cust_with_values("COALESCE(\"monthly_hours\", 0) + ?", [elapsed_hours]),
                )
                .value(
                    Column::AllTimeHours,
                    Expr::cust_with_values("COALESCE(\"all_time_hours\", 0) + ?", [elapsed_hours]),
                )
                .update_columns([Column::LeaveTime, Column::JoinTime])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Zeroes the period's counter for every record across all servers.
    ///
    /// Running it twice in a row is a no-op the second time. Other counters are untouched.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn reset(&self, period: RollupPeriod) -> Result<u64, DbErr> {
        let column = match period {
            RollupPeriod::Daily => entity::time_activity::Column::DailyHours,
            RollupPeriod::Weekly => entity::time_activity::Column::WeeklyHours,
            RollupPeriod::Monthly => entity::time_activity::Column::MonthlyHours,
        };

        let result = entity::prelude::TimeActivity::update_many()
            .col_expr(column, Expr::value(0.0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
