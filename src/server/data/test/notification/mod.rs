use crate::server::{
    data::notification::NotificationRepository,
    model::{notification::NewNotification, role::Role},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_visible;
mod mark_read;

fn broadcast(roles: Vec<Role>) -> NewNotification {
    NewNotification {
        sender_id: None,
        message: "Exam schedule posted".to_string(),
        target_roles: roles,
        target_user_id: None,
        urgent: false,
    }
}
