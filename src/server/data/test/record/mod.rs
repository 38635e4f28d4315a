use crate::server::{data::record::AcademicRecordRepository, model::record::UpsertRecordParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod attendance_by_mentee;
mod upsert;
