//! Direct and group message repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::message::{GroupMessage, Message};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        sender_id: i32,
        receiver_id: i32,
        content: String,
    ) -> Result<Message, DbErr> {
        let message = entity::message::ActiveModel {
            sender_id: ActiveValue::Set(sender_id),
            receiver_id: ActiveValue::Set(receiver_id),
            content: ActiveValue::Set(content),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(message))
    }

    /// Gets the messages exchanged between two users in send order.
    ///
    /// # Arguments
    /// - `user_a`, `user_b` - The two participants, in either order
    /// - `after` - Only messages with a greater ID, for polling
    pub async fn get_conversation(
        &self,
        user_a: i32,
        user_b: i32,
        after: Option<i32>,
    ) -> Result<Vec<Message>, DbErr> {
        let mut query = entity::prelude::Message::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::message::Column::SenderId.eq(user_a))
                            .add(entity::message::Column::ReceiverId.eq(user_b)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::message::Column::SenderId.eq(user_b))
                            .add(entity::message::Column::ReceiverId.eq(user_a)),
                    ),
            )
            .order_by_asc(entity::message::Column::Id);

        if let Some(after) = after {
            query = query.filter(entity::message::Column::Id.gt(after));
        }

        let messages = query.all(self.db).await?;

        Ok(messages.into_iter().map(Message::from_entity).collect())
    }

    /// Marks every unread message from `sender_id` to `receiver_id` as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of messages updated
    pub async fn mark_read(&self, sender_id: i32, receiver_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Message::update_many()
            .col_expr(entity::message::Column::Read, Expr::value(true))
            .filter(entity::message::Column::SenderId.eq(sender_id))
            .filter(entity::message::Column::ReceiverId.eq(receiver_id))
            .filter(entity::message::Column::Read.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts unread messages addressed to a user.
    pub async fn unread_count(&self, receiver_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::ReceiverId.eq(receiver_id))
            .filter(entity::message::Column::Read.eq(false))
            .count(self.db)
            .await
    }

    pub async fn create_group(
        &self,
        mentor_id: i32,
        content: String,
    ) -> Result<GroupMessage, DbErr> {
        let message = entity::group_message::ActiveModel {
            mentor_id: ActiveValue::Set(mentor_id),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GroupMessage::from_entity(message))
    }

    /// Gets a mentor's group messages in posting order.
    pub async fn get_group(
        &self,
        mentor_id: i32,
        after: Option<i32>,
    ) -> Result<Vec<GroupMessage>, DbErr> {
        let mut query = entity::prelude::GroupMessage::find()
            .filter(entity::group_message::Column::MentorId.eq(mentor_id))
            .order_by_asc(entity::group_message::Column::Id);

        if let Some(after) = after {
            query = query.filter(entity::group_message::Column::Id.gt(after));
        }

        let messages = query.all(self.db).await?;

        Ok(messages.into_iter().map(GroupMessage::from_entity).collect())
    }
}
