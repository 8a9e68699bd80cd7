use crate::{data::rollup_checkpoint::RollupCheckpointRepository, model::rollup::RollupPeriod};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get;
mod mark;
