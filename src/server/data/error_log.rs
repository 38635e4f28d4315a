use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::error_log::ErrorLog;

pub struct ErrorLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ErrorLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: Option<i32>,
        action: String,
        error: String,
    ) -> Result<ErrorLog, DbErr> {
        let log = entity::error_log::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            action: ActiveValue::Set(action),
            error: ActiveValue::Set(error),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ErrorLog::from_entity(log))
    }

    /// Gets a page of error logs, newest first.
    ///
    /// # Returns
    /// - `Ok((logs, total))` - Page of logs and total log count
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ErrorLog>, u64), DbErr> {
        let paginator = entity::prelude::ErrorLog::find()
            .order_by_desc(entity::error_log::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let logs = paginator.fetch_page(page).await?;

        Ok((logs.into_iter().map(ErrorLog::from_entity).collect(), total))
    }
}
