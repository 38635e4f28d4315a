use crate::server::data::mentor::MentorRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod active_loads;
mod mentee_counts;
