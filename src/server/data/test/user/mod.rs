use crate::server::{
    data::user::UserRepository,
    model::{role::Role, user::CreateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod delete;
