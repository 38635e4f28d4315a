//! Request and response DTOs shared by the JSON API.
//!
//! Every type here is serializable and carries an OpenAPI schema. Server-side
//! domain models convert into these at the controller boundary.

pub mod api;
pub mod dashboard;
pub mod error_log;
pub mod import;
pub mod mentee;
pub mod mentor;
pub mod message;
pub mod notification;
pub mod record;
pub mod subject;
pub mod user;
