//! SeaORM entities for the mentorship portal.

pub mod prelude;

pub mod academic_record;
pub mod error_log;
pub mod group_message;
pub mod mentee;
pub mod mentor;
pub mod message;
pub mod notification;
pub mod notification_read;
pub mod subject;
pub mod user;
