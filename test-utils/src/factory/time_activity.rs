//! Time activity factory for creating voice time accounting rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test time activity rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let record = TimeActivityFactory::new(&db)
///     .server_id("S1")
///     .user_id("U1")
///     .daily_hours(1.5)
///     .build()
///     .await?;
/// ```
pub struct TimeActivityFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    user_id: String,
    join_time: Option<DateTime<Utc>>,
    leave_time: Option<DateTime<Utc>>,
    daily_hours: Option<f64>,
    weekly_hours: Option<f64>,
    monthly_hours: Option<f64>,
    all_time_hours: Option<f64>,
}

impl<'a> TimeActivityFactory<'a> {
    /// Creates a new TimeActivityFactory with default values.
    ///
    /// Defaults:
    /// - server_id / user_id: unique numeric strings
    /// - join_time / leave_time: `None`
    /// - all four hour counters: `Some(0.0)`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            server_id: next_id().to_string(),
            user_id: next_id().to_string(),
            join_time: None,
            leave_time: None,
            daily_hours: Some(0.0),
            weekly_hours: Some(0.0),
            monthly_hours: Some(0.0),
            all_time_hours: Some(0.0),
        }
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn join_time(mut self, join_time: Option<DateTime<Utc>>) -> Self {
        self.join_time = join_time;
        self
    }

    pub fn leave_time(mut self, leave_time: Option<DateTime<Utc>>) -> Self {
        self.leave_time = leave_time;
        self
    }

    pub fn daily_hours(mut self, hours: Option<f64>) -> Self {
        self.daily_hours = hours;
        self
    }

    pub fn weekly_hours(mut self, hours: Option<f64>) -> Self {
        self.weekly_hours = hours;
        self
    }

    pub fn monthly_hours(mut self, hours: Option<f64>) -> Self {
        self.monthly_hours = hours;
        self
    }

    pub fn all_time_hours(mut self, hours: Option<f64>) -> Self {
        self.all_time_hours = hours;
        self
    }

    /// Sets all four counters to the same value.
    pub fn hours(self, hours: f64) -> Self {
        self.daily_hours(Some(hours))
            .weekly_hours(Some(hours))
            .monthly_hours(Some(hours))
            .all_time_hours(Some(hours))
    }

    /// Builds and inserts the time activity row into the database.
    pub async fn build(self) -> Result<entity::time_activity::Model, DbErr> {
        entity::time_activity::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            user_id: ActiveValue::Set(self.user_id),
            join_time: ActiveValue::Set(self.join_time),
            leave_time: ActiveValue::Set(self.leave_time),
            daily_hours: ActiveValue::Set(self.daily_hours),
            weekly_hours: ActiveValue::Set(self.weekly_hours),
            monthly_hours: ActiveValue::Set(self.monthly_hours),
            all_time_hours: ActiveValue::Set(self.all_time_hours),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a time activity row with default values.
///
/// Shorthand for `TimeActivityFactory::new(db).build().await`.
pub async fn create_time_activity(
    db: &DatabaseConnection,
) -> Result<entity::time_activity::Model, DbErr> {
    TimeActivityFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_time_activity_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(TimeActivity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let record = create_time_activity(db).await?;

        assert!(!record.server_id.is_empty());
        assert!(record.join_time.is_none());
        assert_eq!(record.all_time_hours, Some(0.0));

        Ok(())
    }

    #[tokio::test]
    async fn creates_time_activity_with_custom_hours() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(TimeActivity)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let record = TimeActivityFactory::new(db)
            .server_id("S1")
            .user_id("U1")
            .hours(2.5)
            .daily_hours(None)
            .build()
            .await?;

        assert_eq!(record.server_id, "S1");
        assert_eq!(record.user_id, "U1");
        assert_eq!(record.daily_hours, None);
        assert_eq!(record.weekly_hours, Some(2.5));

        Ok(())
    }
}
