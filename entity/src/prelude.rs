pub use super::academic_record::Entity as AcademicRecord;
pub use super::error_log::Entity as ErrorLog;
pub use super::group_message::Entity as GroupMessage;
pub use super::mentee::Entity as Mentee;
pub use super::mentor::Entity as Mentor;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::notification_read::Entity as NotificationRead;
pub use super::subject::Entity as Subject;
pub use super::user::Entity as User;
