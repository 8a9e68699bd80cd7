use crate::{
    data::time_activity::TimeActivityRepository,
    model::{rollup::RollupPeriod, time_activity::SessionRecord},
};
use chrono::{TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory::time_activity::TimeActivityFactory};

mod add_elapsed;
mod find;
mod record_join;
mod reset;

const TOLERANCE: f64 = 1e-9;

fn assert_hours(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected} hours, got {actual}"
    );
}
