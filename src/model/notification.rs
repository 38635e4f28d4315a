use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    pub sender_id: Option<i32>,
    pub sender_name: Option<String>,
    pub message: String,
    pub target_roles: Vec<String>,
    pub target_user_id: Option<i32>,
    pub urgent: bool,
    /// Whether the requesting user has read this notification.
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateNotificationDto {
    pub message: String,
    /// Roles to broadcast to. Admin only.
    #[serde(default)]
    pub target_roles: Vec<String>,
    /// A single recipient user.
    pub target_user_id: Option<i32>,
    /// Mentors only: send one notification to each of their mentees.
    #[serde(default)]
    pub all_mentees: bool,
    #[serde(default)]
    pub urgent: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NotificationsCreatedDto {
    pub created: u64,
}
