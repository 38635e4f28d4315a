use crate::server::data::message::MessageRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_conversation;
mod mark_read;
