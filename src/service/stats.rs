//! Read accessors for voice time statistics.
//!
//! "No data" (`None`) is kept distinct from zero hours: a member that never joined voice has
//! no record, while a member whose counter was just reset reads `Some(0.0)`.

use sea_orm::DatabaseConnection;

use crate::{
    data::time_activity::TimeActivityRepository,
    error::AppError,
    model::time_activity::{HourCounter, SessionRecord, StatsSnapshot},
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    #[allow(dead_code)]
    pub async fn daily_hours(&self, server_id: &str, user_id: &str) -> Result<Option<f64>, AppError> {
        self.hours(server_id, user_id, HourCounter::Daily).await
    }

    #[allow(dead_code)]
    pub async fn weekly_hours(
        &self,
        server_id: &str,
        user_id: &str,
    ) -> Result<Option<f64>, AppError> {
        self.hours(server_id, user_id, HourCounter::Weekly).await
    }

    #[allow(dead_code)]
    pub async fn monthly_hours(
        &self,
        server_id: &str,
        user_id: &str,
    ) -> Result<Option<f64>, AppError> {
        self.hours(server_id, user_id, HourCounter::Monthly).await
    }

    #[allow(dead_code)]
    pub async fn all_time_hours(
        &self,
        server_id: &str,
        user_id: &str,
    ) -> Result<Option<f64>, AppError> {
        self.hours(server_id, user_id, HourCounter::AllTime).await
    }

    /// Monthly hours divided by a fixed 30 day month.
    #[allow(dead_code)]
    pub async fn average_hours_per_day(
        &self,
        server_id: &str,
        user_id: &str,
    ) -> Result<Option<f64>, AppError> {
        Ok(self
            .record(server_id, user_id)
            .await?
            .map(|record| record.average_hours_per_day()))
    }

    /// Every figure shown by the stats commands, from a single read.
    ///
    /// # Returns
    /// - `Ok(Some(StatsSnapshot))` - The member has a record
    /// - `Ok(None)` - No record, or an empty id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn snapshot(
        &self,
        server_id: &str,
        user_id: &str,
    ) -> Result<Option<StatsSnapshot>, AppError> {
        Ok(self
            .record(server_id, user_id)
            .await?
            .as_ref()
            .map(StatsSnapshot::from_record))
    }

    async fn hours(
        &self,
        server_id: &str,
        user_id: &str,
        counter: HourCounter,
    ) -> Result<Option<f64>, AppError> {
        Ok(self
            .record(server_id, user_id)
            .await?
            .map(|record| record.hours(counter)))
    }

    async fn record(
        &self,
        server_id: &str,
        user_id: &str,
    ) -> Result<Option<SessionRecord>, AppError> {
        if server_id.is_empty() || user_id.is_empty() {
            return Ok(None);
        }

        let repo = TimeActivityRepository::new(self.db);

        match repo.find(server_id, user_id).await {
            Ok(record) => Ok(record),
            Err(e) => {
                tracing::error!(
                    "Failed to read voice time of user {} in guild {}: {}",
                    user_id,
                    server_id,
                    e
                );
                Err(e.into())
            }
        }
    }
}
