use crate::server::{data::mentee::MenteeRepository, model::mentee::MenteeFilter};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod set_mentor;
