//! HTTP request handlers.
//!
//! Each handler checks access with `AuthGuard`, converts DTOs into validated params,
//! calls a service and converts the result back into a DTO.

pub mod admin;
pub mod auth;
pub mod health;
pub mod mentee;
pub mod mentor;
pub mod message;
pub mod notification;
pub mod subject;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Polling cursor: only items with an ID greater than `after` are returned.
#[derive(Deserialize)]
pub struct AfterParams {
    pub after: Option<i32>,
}
