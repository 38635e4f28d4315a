//! Notification data repository.
//!
//! Visibility is resolved in SQL so the list and count queries stay cheap: a row is
//! visible to a user when it targets that user directly or when its JSON role list
//! contains the user's quoted role name.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashSet;

use crate::server::model::{
    notification::{encode_roles, NewNotification},
    role::Role,
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        notification: NewNotification,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            sender_id: ActiveValue::Set(notification.sender_id),
            message: ActiveValue::Set(notification.message),
            target_roles: ActiveValue::Set(encode_roles(&notification.target_roles)),
            target_user_id: ActiveValue::Set(notification.target_user_id),
            urgent: ActiveValue::Set(notification.urgent),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets every notification visible to a user, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Viewing user
    /// - `role` - Viewing user's role
    pub async fn get_visible(
        &self,
        user_id: i32,
        role: Role,
    ) -> Result<Vec<entity::notification::Model>, DbErr> {
        entity::prelude::Notification::find()
            .filter(visible_to(user_id, role))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the IDs of notifications visible to a user.
    pub async fn get_visible_ids(&self, user_id: i32, role: Role) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Notification::find()
            .select_only()
            .column(entity::notification::Column::Id)
            .filter(visible_to(user_id, role))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Returns which of the given notifications the user has read.
    pub async fn read_ids(
        &self,
        user_id: i32,
        notification_ids: Vec<i32>,
    ) -> Result<HashSet<i32>, DbErr> {
        if notification_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<i32> = entity::prelude::NotificationRead::find()
            .select_only()
            .column(entity::notification_read::Column::NotificationId)
            .filter(entity::notification_read::Column::UserId.eq(user_id))
            .filter(entity::notification_read::Column::NotificationId.is_in(notification_ids))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Records that a user read a notification. Repeated calls are no-ops.
    pub async fn mark_read(&self, notification_id: i32, user_id: i32) -> Result<(), DbErr> {
        let existing =
            entity::prelude::NotificationRead::find_by_id((notification_id, user_id))
                .one(self.db)
                .await?;

        if existing.is_none() {
            entity::notification_read::ActiveModel {
                notification_id: ActiveValue::Set(notification_id),
                user_id: ActiveValue::Set(user_id),
                read_at: ActiveValue::Set(Utc::now()),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}

fn visible_to(user_id: i32, role: Role) -> Condition {
    Condition::any()
        .add(entity::notification::Column::TargetUserId.eq(user_id))
        .add(entity::notification::Column::TargetRoles.contains(format!("\"{}\"", role.as_str())))
}
