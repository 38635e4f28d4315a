//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! They provide type-safe representations with business logic separated from database
//! and API concerns.

pub mod dashboard;
pub mod error_log;
pub mod import;
pub mod mentee;
pub mod mentor;
pub mod message;
pub mod notification;
pub mod record;
pub mod role;
pub mod subject;
pub mod user;

/// Computes the page count for `total` items split into pages of `per_page`.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
