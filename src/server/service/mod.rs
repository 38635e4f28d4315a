//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing role rules, value ranges and uniqueness
//! - **Orchestration**: Combining several repositories into one operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Keeping user and profile rows consistent

pub mod assignment;
pub mod auth;
pub mod dashboard;
pub mod error_log;
pub mod import;
pub mod mentee;
pub mod mentor;
pub mod message;
pub mod notification;
pub mod record;
pub mod subject;

#[cfg(test)]
mod test;
