use chrono::{DateTime, Utc};

use crate::{
    model::message::{GroupMessageDto, MessageDto},
    server::error::AppError,
};

/// Longest accepted direct or group message, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            sender_id: entity.sender_id,
            receiver_id: entity.receiver_id,
            content: entity.content,
            read: entity.read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            sender_id: self.sender_id,
            receiver_id: self.receiver_id,
            content: self.content,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupMessage {
    pub id: i32,
    pub mentor_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl GroupMessage {
    pub fn from_entity(entity: entity::group_message::Model) -> Self {
        Self {
            id: entity.id,
            mentor_id: entity.mentor_id,
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> GroupMessageDto {
        GroupMessageDto {
            id: self.id,
            mentor_id: self.mentor_id,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// Trims message content and enforces the non-empty and length rules.
///
/// # Returns
/// - `Ok(String)` - Trimmed content
/// - `Err(AppError::BadRequest)` - Content is blank or longer than [`MAX_MESSAGE_LENGTH`]
pub fn validate_content(content: &str) -> Result<String, AppError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::BadRequest(
            "Message content cannot be empty".to_string(),
        ));
    }
    if content.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Message content must be at most {} characters",
            MAX_MESSAGE_LENGTH
        )));
    }
    Ok(content.to_string())
}
