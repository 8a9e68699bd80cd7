//! Rollup periods for the rolling hour counters.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};

/// A resettable counter period.
///
/// The all-time counter is never reset and has no period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollupPeriod {
    Daily,
    Weekly,
    Monthly,
}

impl RollupPeriod {
    pub const ALL: [RollupPeriod; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Key stored in the `rollup_checkpoint` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Seconds-resolution cron expression firing at the start of each period.
    pub fn cron_expression(&self) -> &'static str {
        match self {
            Self::Daily => "0 0 0 * * *",
            Self::Weekly => "0 0 0 * * Mon",
            Self::Monthly => "0 0 0 1 * *",
        }
    }

    /// Most recent period boundary at or before `now`, in `now`'s time zone.
    ///
    /// Boundaries are local midnight of every day, of every Monday, and of the first day of
    /// every month. Returns `None` only when local midnight does not exist in the zone.
    pub fn last_boundary<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let today = now.date_naive();

        let date = match self {
            Self::Daily => Some(today),
            Self::Weekly => {
                today.checked_sub_days(Days::new(today.weekday().num_days_from_monday() as u64))
            }
            Self::Monthly => NaiveDate::from_ymd_opt(today.year(), today.month(), 1),
        }?;

        let midnight = date.and_hms_opt(0, 0, 0)?;

        now.timezone().from_local_datetime(&midnight).earliest()
    }
}

impl std::fmt::Display for RollupPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
