use crate::data::camera::CameraRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add;
mod is_enforced;
mod remove;
