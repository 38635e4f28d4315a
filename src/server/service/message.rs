//! Direct and group messaging between mentors and their mentees.
//!
//! Direct messages are allowed between a mentor and each of their mentees, and between
//! an admin and anyone. Group messages go from a mentor to all of their mentees and are
//! read by whichever mentees the mentor currently has.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        mentee::MenteeRepository, mentor::MentorRepository, message::MessageRepository,
        user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        message::{validate_content, GroupMessage, Message},
        role::Role,
        user::User,
    },
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a direct message.
    ///
    /// # Returns
    /// - `Ok(Message)` - Stored message
    /// - `Err(AppError::BadRequest)` - Content blank or too long, or messaging yourself
    /// - `Err(AppError::NotFound)` - Receiver does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - The pair may not message each other
    pub async fn send(
        &self,
        sender: &User,
        receiver_id: i32,
        content: &str,
    ) -> Result<Message, AppError> {
        let content = validate_content(content)?;
        if receiver_id == sender.id {
            return Err(AppError::BadRequest(
                "Cannot send a message to yourself".to_string(),
            ));
        }

        let receiver = self.counterpart(receiver_id).await?;
        self.ensure_can_message(sender, &receiver).await?;

        Ok(MessageRepository::new(self.db)
            .create(sender.id, receiver.id, content)
            .await?)
    }

    /// Gets the conversation with another user and marks their messages to the caller read.
    ///
    /// # Arguments
    /// - `user` - Caller
    /// - `other_id` - User ID of the other participant
    /// - `after` - Only return messages with a greater ID
    pub async fn conversation(
        &self,
        user: &User,
        other_id: i32,
        after: Option<i32>,
    ) -> Result<Vec<Message>, AppError> {
        let other = self.counterpart(other_id).await?;
        self.ensure_can_message(user, &other).await?;

        let repo = MessageRepository::new(self.db);
        let messages = repo.get_conversation(user.id, other.id, after).await?;
        repo.mark_read(other.id, user.id).await?;

        Ok(messages)
    }

    pub async fn unread_count(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(MessageRepository::new(self.db).unread_count(user_id).await?)
    }

    /// Posts a group message from a mentor to all of their mentees.
    pub async fn post_group(
        &self,
        mentor_id: i32,
        content: &str,
    ) -> Result<GroupMessage, AppError> {
        let content = validate_content(content)?;

        Ok(MessageRepository::new(self.db)
            .create_group(mentor_id, content)
            .await?)
    }

    /// Gets a mentor's group messages in posting order.
    pub async fn group_messages(
        &self,
        mentor_id: i32,
        after: Option<i32>,
    ) -> Result<Vec<GroupMessage>, AppError> {
        Ok(MessageRepository::new(self.db)
            .get_group(mentor_id, after)
            .await?)
    }

    async fn counterpart(&self, user_id: i32) -> Result<User, AppError> {
        let entity = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        User::from_entity(entity)
    }

    /// Checks the mentor/mentee pairing rule for a direct conversation.
    async fn ensure_can_message(&self, user: &User, other: &User) -> Result<(), AppError> {
        let allowed = match (user.role, other.role) {
            (Role::Admin, _) | (_, Role::Admin) => true,
            (Role::Mentor, Role::Mentee) => self.is_mentor_of(user.id, other.id).await?,
            (Role::Mentee, Role::Mentor) => self.is_mentor_of(other.id, user.id).await?,
            _ => false,
        };

        if !allowed {
            return Err(AuthError::AccessDenied(
                user.id,
                format!("messaging user {}", other.id),
            )
            .into());
        }

        Ok(())
    }

    async fn is_mentor_of(
        &self,
        mentor_user_id: i32,
        mentee_user_id: i32,
    ) -> Result<bool, AppError> {
        let Some(mentor) = MentorRepository::new(self.db)
            .find_by_user_id(mentor_user_id)
            .await?
        else {
            return Ok(false);
        };

        Ok(MenteeRepository::new(self.db)
            .find_by_user_id(mentee_user_id)
            .await?
            .is_some_and(|mentee| mentee.mentor_id == Some(mentor.id)))
    }
}
