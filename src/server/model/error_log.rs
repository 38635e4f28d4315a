use chrono::{DateTime, Utc};

use crate::model::error_log::{ErrorLogDto, PaginatedErrorLogsDto};

/// Persisted record of a request that failed with a server error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorLog {
    pub id: i32,
    pub user_id: Option<i32>,
    /// `METHOD path` of the failed request.
    pub action: String,
    pub error: String,
    pub created_at: DateTime<Utc>,
}

impl ErrorLog {
    pub fn from_entity(entity: entity::error_log::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            action: entity.action,
            error: entity.error,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ErrorLogDto {
        ErrorLogDto {
            id: self.id,
            user_id: self.user_id,
            action: self.action,
            error: self.error,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedErrorLogs {
    pub logs: Vec<ErrorLog>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedErrorLogs {
    pub fn into_dto(self) -> PaginatedErrorLogsDto {
        PaginatedErrorLogsDto {
            logs: self.logs.into_iter().map(ErrorLog::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
