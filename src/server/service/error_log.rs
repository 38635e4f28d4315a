use sea_orm::DatabaseConnection;

use crate::server::{
    data::error_log::ErrorLogRepository,
    error::AppError,
    model::{
        error_log::{ErrorLog, PaginatedErrorLogs},
        total_pages,
    },
};

pub struct ErrorLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ErrorLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a failed request.
    ///
    /// # Arguments
    /// - `user_id` - Session user, if any
    /// - `action` - `METHOD path` of the request
    /// - `error` - Error detail recorded by the handler
    pub async fn record(
        &self,
        user_id: Option<i32>,
        action: String,
        error: String,
    ) -> Result<ErrorLog, AppError> {
        Ok(ErrorLogRepository::new(self.db)
            .create(user_id, action, error)
            .await?)
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedErrorLogs, AppError> {
        let (logs, total) = ErrorLogRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        Ok(PaginatedErrorLogs {
            logs,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
