//! Notification domain models and parameters.
//!
//! A notification reaches every user whose role appears in its target roles, plus the
//! single target user when one is set. Read state is tracked per user, so one
//! broadcast row serves every recipient.

use chrono::{DateTime, Utc};

use crate::{
    model::notification::{CreateNotificationDto, NotificationDto},
    server::{
        error::{internal::InternalError, AppError},
        model::role::Role,
        util::text::required,
    },
};

pub const MAX_NOTIFICATION_LENGTH: usize = 2000;

/// Notification as seen by one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub sender_id: Option<i32>,
    pub sender_name: Option<String>,
    pub message: String,
    pub target_roles: Vec<Role>,
    pub target_user_id: Option<i32>,
    pub urgent: bool,
    /// Whether the viewing user has read it.
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Converts an entity at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Notification)` - Converted notification
    /// - `Err(AppError::InternalErr(InvalidTargetRoles))` - The stored role list is not
    ///   a JSON array of strings
    pub fn from_entity(
        entity: entity::notification::Model,
        sender_name: Option<String>,
        read: bool,
    ) -> Result<Self, AppError> {
        let target_roles = decode_roles(entity.id, &entity.target_roles)?;

        Ok(Self {
            id: entity.id,
            sender_id: entity.sender_id,
            sender_name,
            message: entity.message,
            target_roles,
            target_user_id: entity.target_user_id,
            urgent: entity.urgent,
            read,
            created_at: entity.created_at,
        })
    }

    /// Whether a user with the given id and role is a recipient.
    pub fn is_visible_to(&self, user_id: i32, role: Role) -> bool {
        self.target_user_id == Some(user_id) || self.target_roles.contains(&role)
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            sender_id: self.sender_id,
            sender_name: self.sender_name,
            message: self.message,
            target_roles: self
                .target_roles
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
            target_user_id: self.target_user_id,
            urgent: self.urgent,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

/// Serializes roles into the JSON text stored in `target_roles`.
pub fn encode_roles(roles: &[Role]) -> String {
    let names: Vec<&str> = roles.iter().map(Role::as_str).collect();
    serde_json::Value::from(names).to_string()
}

fn decode_roles(notification_id: i32, raw: &str) -> Result<Vec<Role>, AppError> {
    let names: Vec<String> = serde_json::from_str(raw).map_err(|source| {
        InternalError::InvalidTargetRoles {
            notification_id,
            source,
        }
    })?;

    // Unknown names are skipped so a removed role never hides the whole row.
    Ok(names.iter().filter_map(|n| Role::from_name(n)).collect())
}

/// Validated request to send a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateNotificationParams {
    pub message: String,
    pub target_roles: Vec<Role>,
    pub target_user_id: Option<i32>,
    pub all_mentees: bool,
    pub urgent: bool,
}

impl CreateNotificationParams {
    /// Converts and validates a create request.
    ///
    /// # Returns
    /// - `Ok(CreateNotificationParams)` - Valid request with at least one audience
    /// - `Err(AppError::BadRequest)` - Empty or oversized message, unknown role name,
    ///   or no audience given
    pub fn from_dto(dto: CreateNotificationDto) -> Result<Self, AppError> {
        let message = required(dto.message, "Message")?;
        if message.chars().count() > MAX_NOTIFICATION_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Message must be at most {} characters",
                MAX_NOTIFICATION_LENGTH
            )));
        }

        let mut target_roles = Vec::new();
        for name in &dto.target_roles {
            let role = Role::from_name(name)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown role '{}'", name)))?;
            if !target_roles.contains(&role) {
                target_roles.push(role);
            }
        }

        if target_roles.is_empty() && dto.target_user_id.is_none() && !dto.all_mentees {
            return Err(AppError::BadRequest(
                "Notification needs target roles, a target user or all_mentees".to_string(),
            ));
        }

        Ok(Self {
            message,
            target_roles,
            target_user_id: dto.target_user_id,
            all_mentees: dto.all_mentees,
            urgent: dto.urgent,
        })
    }
}

/// Row to insert into the notification table.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    /// `None` for system notifications raised by scheduled jobs.
    pub sender_id: Option<i32>,
    pub message: String,
    pub target_roles: Vec<Role>,
    pub target_user_id: Option<i32>,
    pub urgent: bool,
}
